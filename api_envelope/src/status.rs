//! Canonical status codes and reason phrases.
//!
//! The catalogue is a fixed, compiled-in table. It is written once, in
//! [`for_each_status!`], and every consumer (the enum below, the lookup
//! functions, the builder's per-status constructors) is generated from that
//! single table.

use std::str::FromStr;

/// Invokes `$mac!` with the full catalogue table:
/// `Variant => code, "Reason Phrase", constructor_name;`.
macro_rules! for_each_status {
    ($mac:ident) => {
        $mac! {
            Continue => 100, "Continue", continue_;
            SwitchingProtocols => 101, "Switching Protocols", switching_protocols;
            Processing => 102, "Processing", processing;
            Ok => 200, "OK", ok;
            Created => 201, "Created", created;
            Accepted => 202, "Accepted", accepted;
            NonAuthoritativeInformation => 203, "Non-Authoritative Information", non_authoritative_information;
            NoContent => 204, "No Content", no_content;
            ResetContent => 205, "Reset Content", reset_content;
            PartialContent => 206, "Partial Content", partial_content;
            MultipleChoices => 300, "Multiple Choices", multiple_choices;
            MovedPermanently => 301, "Moved Permanently", moved_permanently;
            Found => 302, "Found", found;
            SeeOther => 303, "See Other", see_other;
            NotModified => 304, "Not Modified", not_modified;
            TemporaryRedirect => 307, "Temporary Redirect", temporary_redirect;
            PermanentRedirect => 308, "Permanent Redirect", permanent_redirect;
            BadRequest => 400, "Bad Request", bad_request;
            Unauthorized => 401, "Unauthorized", unauthorized;
            PaymentRequired => 402, "Payment Required", payment_required;
            Forbidden => 403, "Forbidden", forbidden;
            NotFound => 404, "Not Found", not_found;
            InternalServerError => 500, "Internal Server Error", internal_server_error;
            NotImplemented => 501, "Not Implemented", not_implemented;
            BadGateway => 502, "Bad Gateway", bad_gateway;
            ServiceUnavailable => 503, "Service Unavailable", service_unavailable;
            GatewayTimeout => 504, "Gateway Timeout", gateway_timeout;
        }
    };
}
pub(crate) use for_each_status;

macro_rules! define_catalogue {
    ($($variant:ident => $code:literal, $reason:literal, $ctor:ident;)+) => {
        /// A status code from the fixed catalogue.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum StatusCode {
            $(
                #[doc = concat!("`", $code, " ", $reason, "`.")]
                $variant = $code,
            )+
        }

        impl StatusCode {
            /// Every catalogue entry, in code order.
            pub const ALL: &'static [StatusCode] = &[$(StatusCode::$variant,)+];

            /// Looks up a catalogue entry by numeric code. Unknown codes
            /// have no mapping.
            pub fn from_code(code: u16) -> Option<StatusCode> {
                match code {
                    $($code => Some(StatusCode::$variant),)+
                    _ => None,
                }
            }

            /// Numeric code.
            pub fn code(self) -> u16 {
                self as u16
            }

            /// Canonical reason phrase.
            pub fn reason(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $reason,)+
                }
            }
        }
    };
}
for_each_status!(define_catalogue);

impl StatusCode {
    /// Status class is 1xx.
    pub fn is_informational(self) -> bool {
        self.code() < 200
    }

    /// Status class is 2xx.
    pub fn is_success(self) -> bool {
        self.code() >= 200 && self.code() < 300
    }

    /// Status class is 3xx.
    pub fn is_redirection(self) -> bool {
        self.code() >= 300 && self.code() < 400
    }

    /// Status class is 4xx.
    pub fn is_client_error(self) -> bool {
        self.code() >= 400 && self.code() < 500
    }

    /// Status class is 5xx.
    pub fn is_server_error(self) -> bool {
        self.code() >= 500
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl FromStr for StatusCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.parse::<u16>().map_err(|_| ())?;
        StatusCode::from_code(code).ok_or(())
    }
}

/// Canonical reason phrase for `code`, or `None` when the code is outside
/// the catalogue.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    StatusCode::from_code(code).map(StatusCode::reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Catalogue lookup --

    #[test]
    fn from_code_known() {
        assert_eq!(StatusCode::from_code(200), Some(StatusCode::Ok));
        assert_eq!(StatusCode::from_code(404), Some(StatusCode::NotFound));
        assert_eq!(StatusCode::from_code(308), Some(StatusCode::PermanentRedirect));
    }

    #[test]
    fn from_code_unknown() {
        assert_eq!(StatusCode::from_code(99), None);
        assert_eq!(StatusCode::from_code(305), None);
        assert_eq!(StatusCode::from_code(418), None);
        assert_eq!(StatusCode::from_code(600), None);
    }

    #[test]
    fn reason_phrases() {
        assert_eq!(StatusCode::Ok.reason(), "OK");
        assert_eq!(
            StatusCode::NonAuthoritativeInformation.reason(),
            "Non-Authoritative Information"
        );
        assert_eq!(StatusCode::InternalServerError.reason(), "Internal Server Error");
        assert_eq!(reason_phrase(504), Some("Gateway Timeout"));
        assert_eq!(reason_phrase(419), None);
    }

    #[test]
    fn catalogue_is_complete() {
        assert_eq!(StatusCode::ALL.len(), 27);
        for status in StatusCode::ALL {
            assert_eq!(StatusCode::from_code(status.code()), Some(*status));
            assert!(!status.reason().is_empty());
        }
    }

    // -- Status classes --

    #[test]
    fn class_predicates() {
        assert!(StatusCode::Processing.is_informational());
        assert!(StatusCode::NoContent.is_success());
        assert!(StatusCode::SeeOther.is_redirection());
        assert!(StatusCode::PaymentRequired.is_client_error());
        assert!(StatusCode::BadGateway.is_server_error());
        assert!(!StatusCode::Ok.is_client_error());
        assert!(!StatusCode::NotFound.is_server_error());
    }

    // -- Display / FromStr --

    #[test]
    fn display_includes_code_and_phrase() {
        assert_eq!(StatusCode::NotFound.to_string(), "404 Not Found");
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
    }

    #[test]
    fn parse_from_numeric_string() {
        assert_eq!("200".parse::<StatusCode>(), Ok(StatusCode::Ok));
        assert_eq!("503".parse::<StatusCode>(), Ok(StatusCode::ServiceUnavailable));
        assert!("999".parse::<StatusCode>().is_err());
        assert!("abc".parse::<StatusCode>().is_err());
    }
}
