//! Display model implementations for table and JSON output
//!
//! Display models transform API records into CLI-friendly rows with
//! appropriate column names and serialization.

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Appointment, Hub, Partner, Slot};
use crate::output::formatters::{format_datetime_local, format_window, or_dash};

/// Partner display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PartnerDisplay {
    #[tabled(rename = "PARTNER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub partner_type: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,
}

impl From<&Partner> for PartnerDisplay {
    fn from(partner: &Partner) -> Self {
        Self {
            id: partner.id.clone(),
            name: partner.name.clone(),
            partner_type: or_dash(partner.partner_type.as_deref()),
            email: or_dash(partner.email.as_deref()),
        }
    }
}

/// Hub display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct HubDisplay {
    #[tabled(rename = "HUB ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "CAPACITY")]
    pub capacity: String,
}

impl From<&Hub> for HubDisplay {
    fn from(hub: &Hub) -> Self {
        Self {
            id: hub.id.clone(),
            name: hub.name.clone(),
            location: or_dash(hub.location.as_deref()),
            capacity: hub
                .capacity
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Slot display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SlotDisplay {
    #[tabled(rename = "SLOT ID")]
    pub id: String,

    #[tabled(rename = "HUB")]
    pub hub_id: String,

    #[tabled(rename = "WINDOW")]
    pub window: String,

    #[tabled(rename = "AVAILABLE")]
    pub available: String,
}

impl From<&Slot> for SlotDisplay {
    fn from(slot: &Slot) -> Self {
        Self {
            id: slot.id.clone(),
            hub_id: slot.hub_id.clone(),
            window: format_window(slot.start_time, slot.end_time),
            available: if slot.available { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Appointment display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppointmentDisplay {
    #[tabled(rename = "APPOINTMENT ID")]
    pub id: String,

    #[tabled(rename = "TYPE")]
    pub appointment_type: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "CUSTOMER")]
    pub customer: String,

    #[tabled(rename = "SCHEDULED")]
    pub scheduled_time: String,

    #[tabled(rename = "PRIORITY")]
    pub priority: String,
}

impl From<&Appointment> for AppointmentDisplay {
    fn from(appt: &Appointment) -> Self {
        Self {
            id: appt.id.clone(),
            appointment_type: or_dash(appt.appointment_type.as_deref()),
            status: appt.status.to_string(),
            customer: or_dash(appt.customer.as_ref().map(|c| c.name.as_str())),
            scheduled_time: appt
                .scheduled_time
                .map(format_datetime_local)
                .unwrap_or_else(|| "N/A".to_string()),
            priority: appt
                .priority
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
