use std::io::{self, BufRead, Write};

/// What an empty answer (plain Enter) means for a given prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDefault {
    Yes,
    No,
}

/// Подтверждение деструктивного действия. Одна точка для обоих случаев:
/// перезапись существующего файла и удаление партиций.
pub trait Confirm {
    fn confirm(&self, prompt: &str, default: ConfirmDefault) -> bool;
}

/// Gate reading one line from stdin. `force` short-circuits every
/// prompt to "yes" without printing anything.
pub struct StdinGate {
    force: bool,
}

impl StdinGate {
    pub fn new(force: bool) -> Self {
        Self { force }
    }
}

impl Confirm for StdinGate {
    fn confirm(&self, prompt: &str, default: ConfirmDefault) -> bool {
        if self.force {
            return true;
        }
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            // Unreadable stdin counts as a decline.
            return false;
        }
        decide(&line, default)
    }
}

/// Pure decision rule: empty input takes the default; otherwise the first
/// character decides. With `No` only a leading y/Y accepts, with `Yes`
/// only a leading n/N declines.
pub fn decide(input: &str, default: ConfirmDefault) -> bool {
    match (input.trim().chars().next(), default) {
        (None, ConfirmDefault::Yes) => true,
        (None, ConfirmDefault::No) => false,
        (Some(c), ConfirmDefault::Yes) => !c.eq_ignore_ascii_case(&'n'),
        (Some(c), ConfirmDefault::No) => c.eq_ignore_ascii_case(&'y'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_no_accepts_only_leading_y() {
        assert!(decide("y\n", ConfirmDefault::No));
        assert!(decide("Yes please\n", ConfirmDefault::No));
        assert!(!decide("\n", ConfirmDefault::No));
        assert!(!decide("n\n", ConfirmDefault::No));
        assert!(!decide("maybe\n", ConfirmDefault::No));
    }

    #[test]
    fn default_yes_declines_only_leading_n() {
        assert!(decide("\n", ConfirmDefault::Yes));
        assert!(decide("y\n", ConfirmDefault::Yes));
        assert!(decide("ok\n", ConfirmDefault::Yes));
        assert!(!decide("n\n", ConfirmDefault::Yes));
        assert!(!decide("NO\n", ConfirmDefault::Yes));
    }

    #[test]
    fn whitespace_only_input_is_the_default() {
        assert!(!decide("   \n", ConfirmDefault::No));
        assert!(decide("   \n", ConfirmDefault::Yes));
    }

    #[test]
    fn force_gate_always_confirms() {
        let gate = StdinGate::new(true);
        // Never reads stdin, so this is safe in a test.
        assert!(gate.confirm("drop everything? ", ConfirmDefault::No));
        assert!(gate.confirm("overwrite? ", ConfirmDefault::Yes));
    }
}
