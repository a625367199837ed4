//! TLV tag identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// TLV tag
///
/// A 16-bit optional-parameter identifier. The named constants cover the
/// SMPP 3.4 parameter table, but any 16-bit value received from a peer is a
/// valid tag and is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TlvTag(u16);

macro_rules! tlv_tags {
    ($($(#[$doc:meta])* $name:ident = $value:literal => $wire_name:literal;)*) => {
        impl TlvTag {
            $(
                $(#[$doc])*
                pub const $name: Self = Self($value);
            )*

            /// Get the parameter name for a known tag
            ///
            /// Returns `None` for tags outside the SMPP 3.4 table.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some($wire_name),)*
                    _ => None,
                }
            }
        }
    };
}

tlv_tags! {
    DEST_ADDR_SUBUNIT = 0x0005 => "dest_addr_subunit";
    DEST_NETWORK_TYPE = 0x0006 => "dest_network_type";
    DEST_BEARER_TYPE = 0x0007 => "dest_bearer_type";
    DEST_TELEMATICS_ID = 0x0008 => "dest_telematics_id";
    SOURCE_ADDR_SUBUNIT = 0x000D => "source_addr_subunit";
    SOURCE_NETWORK_TYPE = 0x000E => "source_network_type";
    SOURCE_BEARER_TYPE = 0x000F => "source_bearer_type";
    SOURCE_TELEMATICS_ID = 0x0010 => "source_telematics_id";
    QOS_TIME_TO_LIVE = 0x0017 => "qos_time_to_live";
    PAYLOAD_TYPE = 0x0019 => "payload_type";
    ADDITIONAL_STATUS_INFO_TEXT = 0x001D => "additional_status_info_text";
    /// Message ID of the message a delivery receipt refers to
    RECEIPTED_MESSAGE_ID = 0x001E => "receipted_message_id";
    MS_MSG_WAIT_FACILITIES = 0x0030 => "ms_msg_wait_facilities";
    PRIVACY_INDICATOR = 0x0201 => "privacy_indicator";
    SOURCE_SUBADDRESS = 0x0202 => "source_subaddress";
    DEST_SUBADDRESS = 0x0203 => "dest_subaddress";
    USER_MESSAGE_REFERENCE = 0x0204 => "user_message_reference";
    USER_RESPONSE_CODE = 0x0205 => "user_response_code";
    /// Application port of the originator (WAP, etc.)
    SOURCE_PORT = 0x020A => "source_port";
    DESTINATION_PORT = 0x020B => "destination_port";
    /// Concatenated message reference number
    SAR_MSG_REF_NUM = 0x020C => "sar_msg_ref_num";
    LANGUAGE_INDICATOR = 0x020D => "language_indicator";
    SAR_TOTAL_SEGMENTS = 0x020E => "sar_total_segments";
    SAR_SEGMENT_SEQNUM = 0x020F => "sar_segment_seqnum";
    CALLBACK_NUM_PRES_IND = 0x0302 => "callback_num_pres_ind";
    CALLBACK_NUM_ATAG = 0x0303 => "callback_num_atag";
    NUMBER_OF_MESSAGES = 0x0304 => "number_of_messages";
    CALLBACK_NUM = 0x0381 => "callback_num";
    DPF_RESULT = 0x0420 => "dpf_result";
    SET_DPF = 0x0421 => "set_dpf";
    MS_AVAILABILITY_STATUS = 0x0422 => "ms_availability_status";
    NETWORK_ERROR_CODE = 0x0423 => "network_error_code";
    /// Message text too long for the mandatory `short_message` field
    MESSAGE_PAYLOAD = 0x0424 => "message_payload";
    DELIVERY_FAILURE_REASON = 0x0425 => "delivery_failure_reason";
    MORE_MESSAGES_TO_SEND = 0x0426 => "more_messages_to_send";
    MESSAGE_STATE_OPTION = 0x0427 => "message_state";
    USSD_SERVICE_OP = 0x0501 => "ussd_service_op";
    DISPLAY_TIME = 0x1201 => "display_time";
    SMS_SIGNAL = 0x1203 => "sms_signal";
    MS_VALIDITY = 0x1204 => "ms_validity";
    ALERT_ON_MESSAGE_DELIVERY = 0x130C => "alert_on_message_delivery";
    ITS_REPLY_TYPE = 0x1380 => "its_reply_type";
    ITS_SESSION_INFO = 0x1383 => "its_session_info";
}

impl TlvTag {
    /// Create a tag from its wire value
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the wire value
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if the tag is part of the SMPP 3.4 parameter table
    pub fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl From<u16> for TlvTag {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<TlvTag> for u16 {
    fn from(tag: TlvTag) -> Self {
        tag.0
    }
}

impl fmt::Display for TlvTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_values() {
        assert_eq!(TlvTag::DEST_ADDR_SUBUNIT.value(), 0x0005);
        assert_eq!(TlvTag::SOURCE_PORT.value(), 0x020A);
        assert_eq!(TlvTag::ITS_SESSION_INFO.value(), 0x1383);
    }

    #[test]
    fn test_unknown_tag_is_representable() {
        let tag = TlvTag::from(0x1400);
        assert!(!tag.is_known());
        assert_eq!(tag.name(), None);
        assert_eq!(u16::from(tag), 0x1400);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(format!("{}", TlvTag::MESSAGE_PAYLOAD), "message_payload");
        assert_eq!(format!("{}", TlvTag::new(0xFFFF)), "0xFFFF");
    }
}
