use crate::shared::date::normalize_iso_date;
use crate::shared::types::DatePredictionDto;

pub const NO_FORECAST_MSG: &str = "No forecast available for this date.";
pub const MISSING_DATE_MSG: &str = "Please select a date before requesting prediction.";
pub const GENERIC_ERROR_MSG: &str = "Error fetching prediction.";

/// Request state of the date-prediction dialog. One request at a time:
/// submissions while `Busy` are dropped by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictState {
    Idle,
    Busy,
    Ready(Vec<DatePredictionDto>),
    Message(String),
}

impl PredictState {
    pub fn is_busy(&self) -> bool {
        matches!(self, PredictState::Busy)
    }

    /// An empty result list is a valid response that simply has nothing to
    /// show for the requested date.
    pub fn from_response(entries: Vec<DatePredictionDto>) -> PredictState {
        if entries.is_empty() {
            PredictState::Message(NO_FORECAST_MSG.to_string())
        } else {
            PredictState::Ready(entries)
        }
    }

    /// Prefer the message the service supplied; fall back to a generic one.
    pub fn from_error(message: Option<String>) -> PredictState {
        PredictState::Message(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_ERROR_MSG.to_string()),
        )
    }
}

/// What a submit click does, decided before any network is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// A request is already in flight; drop the click.
    Ignore,
    /// No usable date; show a validation message, make no request.
    Reject(String),
    /// Issue one request for the normalized date.
    Request(String),
}

pub fn submit_action(state: &PredictState, raw_date: &str) -> SubmitAction {
    if state.is_busy() {
        return SubmitAction::Ignore;
    }
    match normalize_iso_date(raw_date) {
        Some(date) => SubmitAction::Request(date),
        None => SubmitAction::Reject(MISSING_DATE_MSG.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_becomes_no_forecast_message() {
        assert_eq!(
            PredictState::from_response(vec![]),
            PredictState::Message(NO_FORECAST_MSG.to_string())
        );
    }

    #[test]
    fn non_empty_response_is_ready() {
        let entries = vec![DatePredictionDto {
            pollutant: "CO".into(),
            prediction: Some(40.0),
        }];
        assert_eq!(
            PredictState::from_response(entries.clone()),
            PredictState::Ready(entries)
        );
    }

    #[test]
    fn server_message_wins_over_the_generic_one() {
        assert_eq!(
            PredictState::from_error(Some("Invalid date format, expected YYYY-MM-DD".into())),
            PredictState::Message("Invalid date format, expected YYYY-MM-DD".into())
        );
        assert_eq!(
            PredictState::from_error(None),
            PredictState::Message(GENERIC_ERROR_MSG.to_string())
        );
        assert_eq!(
            PredictState::from_error(Some(String::new())),
            PredictState::Message(GENERIC_ERROR_MSG.to_string())
        );
    }

    #[test]
    fn only_busy_reports_busy() {
        assert!(PredictState::Busy.is_busy());
        assert!(!PredictState::Idle.is_busy());
        assert!(!PredictState::Message("x".into()).is_busy());
    }

    #[test]
    fn missing_date_is_rejected_without_a_request() {
        assert_eq!(
            submit_action(&PredictState::Idle, ""),
            SubmitAction::Reject(MISSING_DATE_MSG.to_string())
        );
        assert_eq!(
            submit_action(&PredictState::Idle, "yesterday"),
            SubmitAction::Reject(MISSING_DATE_MSG.to_string())
        );
    }

    #[test]
    fn duplicate_submissions_are_ignored_while_busy() {
        assert_eq!(
            submit_action(&PredictState::Busy, "2024-05-21"),
            SubmitAction::Ignore
        );
        // Even a missing date does not override the in-flight request.
        assert_eq!(submit_action(&PredictState::Busy, ""), SubmitAction::Ignore);
    }

    #[test]
    fn valid_date_requests_the_normalized_form() {
        assert_eq!(
            submit_action(&PredictState::Idle, " 2024-05-21 "),
            SubmitAction::Request("2024-05-21".to_string())
        );
    }
}
