use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum Reply<'a> {
    Exit,
    Echo {
        input: &'a str,
        open: Option<&'a str>,
    },
}

impl<'a> Reply<'a> {
    pub fn parse(line: &'a str) -> Self {
        let input = line.trim();
        let tokens = input.split_whitespace().collect::<Vec<_>>();
        debug!(?tokens, "split input");

        if input == "exit" {
            return Reply::Exit;
        }

        let open = match tokens.as_slice() {
            ["open", target, ..] => Some(*target),
            _ => None,
        };

        Reply::Echo { input, open }
    }
}
