//! Interactive policy collection
//!
//! Asks for the start date and each driver's details one question at a
//! time. Any answer that cannot be understood is reported and the same
//! question is asked again, so collection only fails when the input
//! stream ends or cannot be written to.
//!
//! Answers are taken as typed, minus the line ending. Counts may carry
//! surrounding spaces; dates, codes and `Y`/`N` may not.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::debug;

use core_kernel::parse_uk_date;
use domain_policy::{Claim, Driver, Occupation, PolicyInput, MAX_CLAIMS_PER_DRIVER, MAX_DRIVERS};

use crate::error::CliError;

const START_DATE_PROMPT: &str =
    "Please enter the start date of the policy in format DD/MM/YYYY, e.g. 06/10/2015'";
const DRIVER_COUNT_PROMPT: &str = "How many drivers do you wish to add to the policy? \
     A policy has a minimum of 1 and a maximum of 5 drivers.";
const NAME_PROMPT: &str = "What is the driver's name? ";
const OCCUPATION_PROMPT: &str = "Is the driver a Chauffeur, or an Accountant? \
     Enter C for Chauffeur, or A for Accountant. No other occupation is accepted.";
const DATE_OF_BIRTH_PROMPT: &str =
    "Please enter the driver's date of birth, using format DD/MM/YYYY.";
const ANY_CLAIMS_PROMPT: &str =
    "For this driver, has there been any claims? Y for Yes, N for No.";
const CLAIM_COUNT_PROMPT: &str =
    "How many claims are there? A driver can have a maximum of 5 claims.";

const NOT_UNDERSTOOD: &str = "Response not understood. Please try again.";
const BAD_DATE: &str = "Failed to read date. Please try again.";
const TOO_FEW_DRIVERS: &str = "At least 1 driver must be on the policy. Please try again.";
const TOO_MANY_DRIVERS: &str = "The policy can have a maximum of 5 drivers. Please try again.";

/// Collects a policy by question and answer
pub struct InputCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks every question needed to build a policy
    pub fn collect_policy(&mut self) -> Result<PolicyInput, CliError> {
        let start_date = self.start_date()?;
        let count = self.driver_count()?;

        let mut drivers = Vec::with_capacity(count);
        for number in 1..=count {
            writeln!(self.output, "Please enter the details for driver number {} : ", number)?;
            drivers.push(self.driver()?);
        }

        Ok(PolicyInput::new(start_date, drivers)?)
    }

    /// Gives back the underlying writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn start_date(&mut self) -> Result<NaiveDate, CliError> {
        self.ask_until(START_DATE_PROMPT, |answer| {
            parse_uk_date(answer).map_err(|_| NOT_UNDERSTOOD)
        })
    }

    fn driver_count(&mut self) -> Result<usize, CliError> {
        self.ask_until(DRIVER_COUNT_PROMPT, |answer| match answer.trim().parse::<i64>() {
            Ok(n) if n < 1 => Err(TOO_FEW_DRIVERS),
            Ok(n) if n > MAX_DRIVERS as i64 => Err(TOO_MANY_DRIVERS),
            Ok(n) => usize::try_from(n).map_err(|_| NOT_UNDERSTOOD),
            Err(_) => Err(NOT_UNDERSTOOD),
        })
    }

    fn driver(&mut self) -> Result<Driver, CliError> {
        let name = self.ask_until(NAME_PROMPT, |answer| {
            if answer.is_empty() {
                Err(NOT_UNDERSTOOD)
            } else {
                Ok(answer.to_string())
            }
        })?;
        let occupation = self.ask_until(OCCUPATION_PROMPT, |answer| {
            Occupation::from_code(answer).ok_or(NOT_UNDERSTOOD)
        })?;
        let date_of_birth = self.ask_until(DATE_OF_BIRTH_PROMPT, |answer| {
            parse_uk_date(answer).map_err(|_| NOT_UNDERSTOOD)
        })?;
        let claims = self.claims()?;

        debug!(name = %name, occupation = %occupation, claims = claims.len(), "Driver collected");
        Ok(Driver::new(name, occupation, date_of_birth).with_claims(claims))
    }

    fn claims(&mut self) -> Result<Vec<Claim>, CliError> {
        let any_claims = self.ask_until(ANY_CLAIMS_PROMPT, |answer| match answer {
            "Y" | "y" => Ok(true),
            "N" | "n" => Ok(false),
            _ => Err(NOT_UNDERSTOOD),
        })?;
        if !any_claims {
            return Ok(Vec::new());
        }

        let count = self.ask_until(CLAIM_COUNT_PROMPT, |answer| {
            match answer.trim().parse::<usize>() {
                Ok(n) if n <= MAX_CLAIMS_PER_DRIVER => Ok(n),
                _ => Err(NOT_UNDERSTOOD),
            }
        })?;

        (1..=count)
            .map(|number| {
                let prompt = format!(
                    "Please enter the date of claim for claim number {} . \
                     Please enter in following format: 'DD/MM/YYYY'.",
                    number
                );
                self.ask_until(&prompt, |answer| {
                    parse_uk_date(answer).map(Claim::new).map_err(|_| BAD_DATE)
                })
            })
            .collect()
    }

    /// Repeats `prompt` until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, &'static str>,
    ) -> Result<T, CliError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collector(script: &str) -> InputCollector<Cursor<Vec<u8>>, Vec<u8>> {
        InputCollector::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_single_driver_without_claims() {
        let mut c = collector("06/10/2030\n1\nAlice\nA\n14/02/1990\nN\n");
        let policy = c.collect_policy().unwrap();

        assert_eq!(policy.drivers().len(), 1);
        assert_eq!(policy.drivers()[0].occupation, Occupation::Accountant);
    }

    #[test]
    fn test_zero_drivers_reprompts() {
        let mut c = collector("06/10/2030\n0\n1\nAlice\nA\n14/02/1990\nn\n");
        c.collect_policy().unwrap();

        let transcript = String::from_utf8(c.into_output()).unwrap();
        assert!(transcript.contains(TOO_FEW_DRIVERS));
    }

    #[test]
    fn test_lowercase_occupation_not_understood() {
        let mut c = collector("06/10/2030\n1\nAlice\nc\nC\n14/02/1990\nN\n");
        let policy = c.collect_policy().unwrap();

        assert_eq!(policy.drivers()[0].occupation, Occupation::Chauffeur);
        let transcript = String::from_utf8(c.into_output()).unwrap();
        assert!(transcript.contains(NOT_UNDERSTOOD));
    }

    #[test]
    fn test_whitespace_name_kept_as_typed() {
        let mut c = collector("06/10/2030\n1\n \nA\n14/02/1990\nN\n");
        let policy = c.collect_policy().unwrap();

        assert_eq!(policy.drivers()[0].name, " ");
    }

    #[test]
    fn test_padded_date_not_understood() {
        let mut c = collector(" 06/10/2030\n06/10/2030\r\n 1 \nAlice\nA\n14/02/1990\nN\n");
        let policy = c.collect_policy().unwrap();

        assert_eq!(policy.start_date(), NaiveDate::from_ymd_opt(2030, 10, 6).unwrap());
        let transcript = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(transcript.matches(NOT_UNDERSTOOD).count(), 1);
    }

    #[test]
    fn test_eof_mid_policy() {
        let mut c = collector("06/10/2030\n2\n");
        assert!(matches!(c.collect_policy(), Err(CliError::InputClosed)));
    }
}
