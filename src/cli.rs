use std::io::{self, BufRead, Write};

use crate::MihomoClient;

pub const PROMPT: &str = "请输入UID: ";

/// Reads one line and trims it. Empty input and EOF both yield `None`.
pub fn read_uid<R: BufRead>(mut input: R) -> io::Result<Option<String>> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(non_empty(&line))
}

fn non_empty(raw: &str) -> Option<String> {
    let uid = raw.trim();
    if uid.is_empty() {
        None
    } else {
        Some(uid.to_string())
    }
}

/// Resolves the identifier (argument, else prompt + stdin) and prints the
/// result of at most one lookup.
pub async fn run<R: BufRead, W: Write>(
    client: &MihomoClient,
    uid_arg: Option<String>,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let uid = match uid_arg {
        Some(arg) => non_empty(&arg),
        None => {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            read_uid(input)?
        }
    };

    let Some(uid) = uid else {
        return Ok(());
    };

    let lookup = client.lookup(&uid).await;
    writeln!(output, "{lookup}")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_identifier() {
        let uid = read_uid("  100000001 \n".as_bytes()).unwrap();
        assert_eq!(uid.as_deref(), Some("100000001"));
    }

    #[test]
    fn blank_and_eof_are_none() {
        assert_eq!(read_uid(" \t\n".as_bytes()).unwrap(), None);
        assert_eq!(read_uid("".as_bytes()).unwrap(), None);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn closed_stdout_is_returned_not_panicked() {
        let client = MihomoClient::with_http_client(crate::URL, reqwest::Client::new());
        let err = run(&client, None, "".as_bytes(), &mut BrokenPipe)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn only_first_line_is_read() {
        let uid = read_uid("1\n2\n".as_bytes()).unwrap();
        assert_eq!(uid.as_deref(), Some("1"));
    }
}
