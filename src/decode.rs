use crate::errors::EndpointError;
use crate::net::Response;
use crate::request::Receiver;

/// Status codes from this value up are decoded into the error receiver.
pub const ERROR_STATUS_THRESHOLD: u16 = 400;

/// Decodes the body of `resp` into the receiver matching its status class.
///
/// Nothing is decoded when the body is empty or the matching receiver is
/// absent. Returns whether a receiver was filled.
pub fn decode_response(resp: &Response, success: Receiver<'_>, error: Receiver<'_>) -> Result<bool, EndpointError> {
    if resp.body.is_empty() {
        log::trace!("{} response has no body, skipping decode", resp.status);
        return Ok(false);
    }

    let receiver = if resp.status < ERROR_STATUS_THRESHOLD { success } else { error };
    if !receiver.is_some() {
        log::trace!("no receiver for {} response, leaving body undecoded", resp.status);
        return Ok(false);
    }

    receiver.receive(&resp.body).map_err(EndpointError::Decoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use url::Url;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Ok200 {
        id: u32,
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Problem {
        message: String,
    }

    fn response(status: u16, body: &str) -> Response {
        Response {
            url: Url::parse("https://example.com/").unwrap(),
            status,
            status_text: String::new(),
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_status_fills_success_receiver() {
        let mut ok = Ok200::default();
        let mut problem = Problem::default();

        let decoded = decode_response(&response(200, r#"{"id": 9}"#), (&mut ok).into(), (&mut problem).into()).unwrap();

        assert!(decoded);
        assert_eq!(ok, Ok200 { id: 9 });
        assert_eq!(problem, Problem::default());
    }

    #[test]
    fn redirect_range_counts_as_success() {
        let mut ok = Ok200::default();
        decode_response(&response(304, r#"{"id": 1}"#), (&mut ok).into(), Receiver::none()).unwrap();
        assert_eq!(ok.id, 1);
    }

    #[test]
    fn error_status_fills_error_receiver() {
        let mut problem = Problem::default();

        let decoded = decode_response(
            &response(404, r#"{"message": "not found"}"#),
            Receiver::none(),
            (&mut problem).into(),
        )
        .unwrap();

        assert!(decoded);
        assert_eq!(problem.message, "not found");
    }

    #[test]
    fn missing_receiver_leaves_body_alone() {
        let mut ok = Ok200::default();
        let decoded = decode_response(&response(500, "not json at all"), (&mut ok).into(), Receiver::none()).unwrap();

        assert!(!decoded);
        assert_eq!(ok, Ok200::default());
    }

    #[test]
    fn empty_body_is_not_decoded() {
        let mut ok = Ok200 { id: 3 };
        let decoded = decode_response(&response(200, ""), (&mut ok).into(), Receiver::none()).unwrap();

        assert!(!decoded);
        assert_eq!(ok.id, 3);
    }

    #[test]
    fn malformed_json_is_a_decoding_error() {
        let mut ok = Ok200::default();
        let err = decode_response(&response(200, "{oops"), (&mut ok).into(), Receiver::none()).unwrap_err();
        assert!(matches!(err, EndpointError::Decoding(_)));
    }

    #[test]
    fn shape_mismatch_is_a_decoding_error() {
        let mut problem = Problem::default();
        let err = decode_response(&response(422, r#"{"message": 5}"#), Receiver::none(), (&mut problem).into()).unwrap_err();
        assert!(matches!(err, EndpointError::Decoding(_)));
    }
}
