/// A lenient view of the `player` object returned by `sr_info_parsed`.
/// Built by [`crate::Lookup::player_view`]; every field is optional and unknown
/// fields are ignored, so a schema change upstream never breaks a lookup.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Player {
    pub(crate) uid: Option<String>,
    pub(crate) nickname: Option<String>,
    pub(crate) level: Option<u32>,
    /// API: "world_level", the Equilibrium Level
    pub(crate) world_level: Option<u32>,
}

impl Player {
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }
    pub fn level(&self) -> Option<u32> {
        self.level
    }
    pub fn world_level(&self) -> Option<u32> {
        self.world_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_player_card() {
        let json = r#"{
            "uid": "100000001",
            "nickname": "Trailblazer",
            "level": 70,
            "world_level": 6,
            "friend_count": 12,
            "avatar": {"id": "1001", "name": "March 7th", "icon": "icon/avatar/1001.png"},
            "is_display": true
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.uid(), Some("100000001"));
        assert_eq!(player.nickname(), Some("Trailblazer"));
        assert_eq!(player.level(), Some(70));
        assert_eq!(player.world_level(), Some(6));
    }

    #[test]
    fn partial_player_card() {
        let player: Player = serde_json::from_str(r#"{"nickname":"jay","level":null}"#).unwrap();
        assert_eq!(player.nickname(), Some("jay"));
        assert!(player.uid().is_none());
        assert!(player.level().is_none());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(serde_json::from_str::<Player>(r#""X""#).is_err());
    }
}
