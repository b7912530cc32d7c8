// Terminal command parsing

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    ToggleForm,
    DraftUrl(String),
    DraftPrice(String),
    Submit,
    Delete(String),
    History(String),
    Dismiss,
    Login { username: String, password: String },
    Register { username: String, email: String, password: String },
    Logout,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

pub const HELP: &str = "\
commands:
  refresh                            reload the dashboard
  add                                show or hide the add-product form
  url <product url>                  set the form's product URL
  price <target price>               set the form's target price
  submit                             add the product in the form
  delete <id>                        stop tracking a product
  history <id>                       show recorded prices of a product
  dismiss                            close the current notification
  login <username> <password>        log in
  register <username> <email> <pw>   create an account
  logout                             return to login
  quit";

/// Parse one input line. Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let command = match name.to_ascii_lowercase().as_str() {
        "refresh" | "r" => Command::Refresh,
        "add" => Command::ToggleForm,
        // The rest of the line is the value so drafts may contain spaces.
        "url" => Command::DraftUrl(rest.to_string()),
        "price" => Command::DraftPrice(rest.to_string()),
        "submit" => Command::Submit,
        "delete" | "rm" => Command::Delete(required(args.next(), "delete", "a product id")?),
        "history" => Command::History(required(args.next(), "history", "a product id")?),
        "dismiss" | "ok" => Command::Dismiss,
        "login" => Command::Login {
            username: required(args.next(), "login", "a username")?,
            password: required(args.next(), "login", "a password")?,
        },
        "register" => Command::Register {
            username: required(args.next(), "register", "a username")?,
            email: required(args.next(), "register", "an email")?,
            password: required(args.next(), "register", "a password")?,
        },
        "logout" => Command::Logout,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required(
    arg: Option<&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandError> {
    arg.map(str::to_string)
        .ok_or(CommandError::MissingArgument { command, argument })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(parse_command("refresh"), Ok(Some(Command::Refresh)));
        assert_eq!(parse_command("ADD"), Ok(Some(Command::ToggleForm)));
        assert_eq!(
            parse_command("delete p1"),
            Ok(Some(Command::Delete("p1".to_string())))
        );
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_draft_values_keep_the_rest_of_the_line() {
        assert_eq!(
            parse_command("url https://shop.example/a b"),
            Ok(Some(Command::DraftUrl("https://shop.example/a b".to_string())))
        );
        assert_eq!(
            parse_command("price"),
            Ok(Some(Command::DraftPrice(String::new())))
        );
    }

    #[test]
    fn test_login_arguments() {
        assert_eq!(
            parse_command("login ana secret"),
            Ok(Some(Command::Login {
                username: "ana".to_string(),
                password: "secret".to_string()
            }))
        );
        assert_eq!(
            parse_command("login ana"),
            Err(CommandError::MissingArgument {
                command: "login",
                argument: "a password"
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("frobnicate now"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}
