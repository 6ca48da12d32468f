//! Line-oriented search form
//!
//! Reads commands such as `budget high`, `interest nature` and `search`,
//! forwards them to the controller and prints whatever needs redrawing.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use tracing::debug;

use crate::controller::{SelectionController, SelectionObserver};
use crate::gateway::RecommendationSource;
use crate::models::{BudgetTier, InterestCategory};
use crate::{AdvisorError, render};

const HELP: &str = "\
Commands:
  budget <low|medium|high>                          select a budget
  interest <beach|nature|history|shopping|city>     select an interest
  search                                            find destinations
  show                                              show the current selection
  help                                              show this help
  quit                                              leave
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Budget(BudgetTier),
    Interest(InterestCategory),
    Search,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let argument = words.next();
        if words.next().is_some() {
            return Err(AdvisorError::validation(format!("too many arguments in '{s}'")));
        }

        match (verb.as_str(), argument) {
            ("budget", Some(value)) => Ok(Command::Budget(value.parse()?)),
            ("interest", Some(value)) => Ok(Command::Interest(value.parse()?)),
            ("budget" | "interest", None) => {
                Err(AdvisorError::validation(format!("'{verb}' needs a value")))
            }
            ("search" | "find", None) => Ok(Command::Search),
            ("show", None) => Ok(Command::Show),
            ("help" | "?", None) => Ok(Command::Help),
            ("quit" | "exit", None) => Ok(Command::Quit),
            _ => Err(AdvisorError::validation(format!(
                "unknown command '{}', type 'help' for a list",
                s.trim()
            ))),
        }
    }
}

/// Which option groups need redrawing after a selection change
#[derive(Debug, Default)]
struct Redraw {
    budget: bool,
    interest: bool,
}

#[derive(Clone, Default)]
struct RedrawObserver {
    pending: Rc<RefCell<Redraw>>,
}

impl SelectionObserver for RedrawObserver {
    fn budget_changed(&mut self, _previous: BudgetTier, _current: BudgetTier) {
        self.pending.borrow_mut().budget = true;
    }

    fn interest_changed(&mut self, _previous: InterestCategory, _current: InterestCategory) {
        self.pending.borrow_mut().interest = true;
    }
}

/// Run the form until `quit` or end of input
pub fn run<S, R, W>(controller: &mut SelectionController<S>, input: R, output: &mut W) -> io::Result<()>
where
    S: RecommendationSource,
    R: BufRead,
    W: Write,
{
    let observer = RedrawObserver::default();
    let pending = Rc::clone(&observer.pending);
    let id = controller.subscribe(Box::new(observer));

    let result = run_session(controller, input, output, &pending);
    controller.unsubscribe(id);
    result
}

fn run_session<S, R, W>(
    controller: &mut SelectionController<S>,
    input: R,
    output: &mut W,
    pending: &RefCell<Redraw>,
) -> io::Result<()>
where
    S: RecommendationSource,
    R: BufRead,
    W: Write,
{
    writeln!(output, "✈ Travel & Visa Consultant")?;
    let state = controller.state();
    write!(output, "{}", render::budget_options(&state))?;
    write!(output, "{}", render::interest_options(&state))?;
    writeln!(output, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e.user_message())?;
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            Command::Budget(tier) => {
                controller.select_budget(tier);
            }
            Command::Interest(category) => {
                controller.select_interest(category);
            }
            Command::Search => {
                writeln!(output, "🔍 Searching for destinations...")?;
                write!(output, "{}", render::outcome(&controller.search()))?;
            }
            Command::Show => {
                let state = controller.state();
                write!(output, "{}", render::budget_options(&state))?;
                write!(output, "{}", render::interest_options(&state))?;
            }
            Command::Help => write!(output, "{HELP}")?,
            Command::Quit => break,
        }

        let redraw = std::mem::take(&mut *pending.borrow_mut());
        let state = controller.state();
        if redraw.budget {
            write!(output, "{}", render::budget_options(&state))?;
        }
        if redraw.interest {
            write!(output, "{}", render::interest_options(&state))?;
        }
    }

    writeln!(output, "Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PrologEngine;
    use crate::engine::testing::load_source;
    use crate::gateway::RecommendationGateway;
    use rstest::rstest;

    #[rstest]
    #[case("budget high", Command::Budget(BudgetTier::High))]
    #[case("  INTEREST   city ", Command::Interest(InterestCategory::City))]
    #[case("search", Command::Search)]
    #[case("find", Command::Search)]
    #[case("show", Command::Show)]
    #[case("?", Command::Help)]
    #[case("exit", Command::Quit)]
    fn test_parse_command(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(input.parse::<Command>().unwrap(), expected);
    }

    #[rstest]
    #[case("budget")]
    #[case("budget luxury")]
    #[case("interest beach now")]
    #[case("fly")]
    fn test_parse_command_errors(#[case] input: &str) {
        assert!(input.parse::<Command>().is_err());
    }

    fn hunza_controller() -> SelectionController<RecommendationGateway<PrologEngine>> {
        let engine = load_source(
            r#"destination_info('Hunza', low, nature, visa_free, "CNIC", 'May-Oct', 300)."#,
        );
        SelectionController::new(RecommendationGateway::new(engine))
    }

    fn session(script: &str) -> String {
        let mut controller = hunza_controller();
        let mut output = Vec::new();
        run(&mut controller, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_search_flow() {
        let text = session("search\nbudget low\ninterest nature\nsearch\nquit\nsearch\n");
        assert!(text.contains("No Destinations Found"));
        assert!(text.contains("Found 1 Perfect Destination for You"));
        assert!(text.contains("HUNZA"));
        assert!(text.ends_with("Goodbye!\n"));
        assert_eq!(text.matches("Searching for destinations").count(), 2);
    }

    #[test]
    fn test_session_redraws_only_changed_groups() {
        let text = session("budget high\nbudget high\n");
        // one budget group at startup, one redraw for the single real change
        assert_eq!(text.matches("Select Your Budget").count(), 2);
        assert_eq!(text.matches("What Interests You?").count(), 1);
    }

    #[test]
    fn test_session_reports_bad_input_and_continues() {
        let text = session("budget luxury\nshow\n");
        assert!(text.contains("unknown budget 'luxury'"));
        assert_eq!(text.matches("Select Your Budget").count(), 2);
    }

    #[test]
    fn test_repeated_sessions_leave_no_observers_behind() {
        let mut controller = hunza_controller();
        for _ in 0..3 {
            let mut output = Vec::new();
            run(&mut controller, "budget high
quit
".as_bytes(), &mut output).unwrap();
        }
        assert_eq!(controller.observer_count(), 0);

        let mut output = Vec::new();
        run(&mut controller, "budget low
".as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Select Your Budget").count(), 2);
    }
}
