//! End-to-end integration tests
//!
//! These tests drive complete ATM sessions from scripted input. Each fixture
//! test:
//! 1. Reads input.txt from a fixture directory (one line per keyboard entry)
//! 2. Runs a session over the seeded directory until logout
//! 3. Checks that every line of expected.txt appears in the transcript, in order
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path login and balance inquiry
//! - Credential failures (wrong PIN, unknown user)
//! - Withdrawals beyond the balance
//! - Mini-statement ordering
//! - Invalid menu choices and malformed amounts

#[cfg(test)]
mod tests {
    use atm_console::{Account, AccountDirectory, AtmError, Session, SessionState};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    /// Run a scripted session and return its transcript
    fn run_script(script: &str) -> (Result<(), AtmError>, AccountDirectory, String) {
        let mut session = Session::new(
            AccountDirectory::seeded(),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        let result = session.run();
        let (directory, output) = session.into_parts();
        let transcript = String::from_utf8(output).expect("transcript is UTF-8");
        (result, directory, transcript)
    }

    /// Run a fixture by feeding input.txt and checking expected.txt against the transcript
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input or expected files cannot be read
    /// - The session does not end with a logout
    /// - An expected line is missing or out of order
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.txt", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let script = fs::read_to_string(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read input file {}: {}", input_path, e));
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        let (result, _, transcript) = run_script(&script);
        assert_eq!(
            result,
            Ok(()),
            "\n\nSession for fixture {} did not log out\n\nTranscript:\n{}\n",
            fixture_name,
            transcript
        );

        let mut cursor = 0;
        for line in expected.lines().filter(|l| !l.is_empty()) {
            match transcript[cursor..].find(line) {
                Some(offset) => cursor += offset + line.len(),
                None => panic!(
                    "\n\nMissing or out-of-order line for fixture {}: {:?}\n\nTranscript:\n{}\n",
                    fixture_name, line, transcript
                ),
            }
        }
    }

    #[rstest]
    #[case("happy_path")]
    #[case("wrong_pin_then_login")]
    #[case("unknown_user")]
    #[case("insufficient_funds")]
    #[case("mini_statement")]
    #[case("invalid_menu_choices")]
    #[case("malformed_amounts")]
    #[case("second_account")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[rstest]
    #[case::first("1234", "1234", 150)]
    #[case::second("5678", "5678", 100)]
    fn test_every_seed_account_can_log_in(
        #[case] id: &str,
        #[case] pin: &str,
        #[case] balance: i64,
    ) {
        let (result, _, transcript) = run_script(&format!("{}\n{}\n1\n5\n", id, pin));

        assert_eq!(result, Ok(()));
        assert_eq!(transcript.matches("Authentication successful.").count(), 1);
        assert!(transcript.contains(&format!("Welcome, User {}!", id)));
        assert!(transcript.contains(&format!("Your Balance is: Rs.{}/-", balance)));
    }

    #[test]
    fn test_deposits_sum_into_balance() {
        let deposits = [5, 10, 15, 20, 25];
        let mut script = String::from("1234\n1234\n");
        for d in deposits {
            script.push_str(&format!("3\n{}\n", d));
        }
        script.push_str("5\n");

        let (result, directory, _) = run_script(&script);

        assert_eq!(result, Ok(()));
        let account = directory.account("1234").unwrap();
        assert_eq!(account.balance(), Decimal::new(150 + 75, 0));
        assert_eq!(account.transactions().len(), deposits.len());
    }

    #[rstest]
    #[case::exponent("1e3")]
    #[case::negative_exponent("1e-2")]
    #[case::underscore("1_000")]
    fn test_non_plain_amounts_are_not_deposited(#[case] amount: &str) {
        let (result, directory, transcript) =
            run_script(&format!("1234\n1234\n3\n{}\n4\n5\n", amount));

        assert_eq!(result, Ok(()));
        assert!(transcript.contains(&format!(
            "Invalid amount '{}'. Please enter a positive number.",
            amount
        )));
        assert!(!transcript.contains("Deposit: +"));
        assert_eq!(
            directory.account("1234").map(Account::balance),
            Some(Decimal::new(150, 0))
        );
    }

    #[test]
    fn test_only_the_bound_account_changes() {
        let (_, directory, _) = run_script("5678\n5678\n2\n40\n5\n");

        assert_eq!(
            directory.account("5678").map(Account::balance),
            Some(Decimal::new(60, 0))
        );
        assert_eq!(
            directory.account("1234").map(Account::balance),
            Some(Decimal::new(150, 0))
        );
    }

    #[rstest]
    #[case::empty_input("")]
    #[case::only_user_id("1234\n")]
    #[case::never_authenticated("1234\n0000\n")]
    #[case::no_logout("1234\n1234\n1\n")]
    #[case::mid_withdrawal("1234\n1234\n2\n")]
    fn test_end_of_input_is_reported(#[case] script: &str) {
        let (result, _, _) = run_script(script);
        assert_eq!(result, Err(AtmError::InputClosed));
    }

    #[test]
    fn test_state_after_logout() {
        let mut session = Session::new(
            AccountDirectory::seeded(),
            Cursor::new("1234\n1234\n5\n"),
            Vec::new(),
        );

        session.run().unwrap();

        assert_eq!(session.state(), &SessionState::Terminated);
        assert!(session.current_account().is_none());
    }
}
