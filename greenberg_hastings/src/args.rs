// args.rs - Command line handling

use log::debug;

pub const HELP_TEXT: &str = "\
Greenberg-Hastings Automaton
This program is distributed under the BSD-2 License.

Command line args:
\t--help            \tShow this help prompt.
\t--nogui           \tForce execution of automata on console.

Runtime GUI commands:
\tc                 \tClear the grid
\t-                 \tSlow down the simulation
\t=                 \tSpeed up the simulation
\tLeft mouse button \tExcite highlighted cell
\tRight mouse button\tPause/unpause application

Runtime CLI commands:
\tEnter             \tIterate or input command
\tq                 \tFinish simulation on input
";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Gui,
    Console,
    /// Print `HELP_TEXT` and exit.
    Help,
}

/// Picks the run mode. `--help` wins as soon as it is seen; anything
/// unrecognized is ignored.
pub fn parse<I, S>(args: I) -> Mode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut nogui = false;
    for arg in args {
        match arg.as_ref() {
            "--nogui" => nogui = true,
            "--help" => return Mode::Help,
            other => debug!("Ignoring argument {:?}", other),
        }
    }
    if nogui { Mode::Console } else { Mode::Gui }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gui() {
        assert_eq!(parse(Vec::<String>::new()), Mode::Gui);
    }

    #[test]
    fn test_nogui() {
        assert_eq!(parse(["--nogui"]), Mode::Console);
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(["--nogui", "--help"]), Mode::Help);
        assert_eq!(parse(["--help", "--nogui"]), Mode::Help);
    }

    #[test]
    fn test_unknown_args_ignored() {
        assert_eq!(parse(["-nogui", "--verbose", "foo"]), Mode::Gui);
        assert_eq!(parse(["foo", "--nogui", "bar"]), Mode::Console);
    }

    #[test]
    fn test_help_lists_bindings() {
        for needle in ["--help", "--nogui", "Left mouse button", "Right mouse button", "q "] {
            assert!(HELP_TEXT.contains(needle), "missing {:?}", needle);
        }
    }
}
