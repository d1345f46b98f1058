//! Redfish error envelope
//!
//! Bodies are fixed per failure class. The cause of a failure is logged,
//! never returned to the client.

use serde::Serialize;

const GENERAL_ERROR: &str = "Base.1.1.GeneralError";

const GENERAL_ERROR_MESSAGE: &str =
    "A general error has occurred. See ExtendedInfo for more information.";

const MESSAGE_TYPE: &str = "#Message.v1_0_5.Message";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(rename = "@Message.ExtendedInfo")]
    extended_info: Vec<MessageInfo>,
}

/// Entry of `@Message.ExtendedInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageInfo {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub message_id: String,
    pub message: String,
    pub severity: String,
    pub resolution: String,
}

impl ErrorDocument {
    /// General error wrapping a single registry message
    pub fn general(info: MessageInfo) -> Self {
        Self {
            error: ErrorBody {
                code: GENERAL_ERROR.to_string(),
                message: GENERAL_ERROR_MESSAGE.to_string(),
                extended_info: vec![info],
            },
        }
    }

    /// Body of every 500 response
    pub fn internal_error() -> Self {
        Self::general(MessageInfo::critical(
            "Base.1.1.InternalError",
            "The request failed due to an internal service error.  The service is still operational.",
            "Resubmit the request.  If the problem persists, consider resetting the service.",
        ))
    }

    /// Body of every 404 response
    pub fn resource_missing() -> Self {
        Self::general(MessageInfo::critical(
            "Base.1.1.ResourceMissingAtURI",
            "The resource at the URI was not found.",
            "Place a valid resource at the URI or correct the URI and resubmit the request.",
        ))
    }
}

impl MessageInfo {
    pub fn critical(message_id: &str, message: &str, resolution: &str) -> Self {
        Self {
            odata_type: MESSAGE_TYPE.to_string(),
            message_id: message_id.to_string(),
            message: message.to_string(),
            severity: "Critical".to_string(),
            resolution: resolution.to_string(),
        }
    }
}
