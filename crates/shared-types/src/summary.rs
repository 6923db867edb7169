use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::parse_date;
use crate::models::Appointment;

/// Counts shown on the appointment dashboards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentSummary {
    pub total: usize,
    pub today: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub pending_check_ins: usize,
    pub missed: usize,
}

fn is_closed(status: &str) -> bool {
    ["completed", "cancelled", "canceled"]
        .iter()
        .any(|s| s.eq_ignore_ascii_case(status))
}

impl AppointmentSummary {
    pub fn from_appointments(appointments: &[Appointment], today: NaiveDate) -> Self {
        let mut summary = Self {
            total: appointments.len(),
            ..Self::default()
        };

        for appt in appointments {
            let Some(date) = parse_date(&appt.appointment_date) else {
                continue;
            };
            let status = appt.status.trim();
            let closed = is_closed(status);

            if date == today {
                summary.today += 1;
                if status.eq_ignore_ascii_case("pending")
                    || status.eq_ignore_ascii_case("scheduled")
                {
                    summary.pending_check_ins += 1;
                }
            }
            if date >= today && !closed {
                summary.upcoming += 1;
            }
            if date < today && !closed {
                summary.missed += 1;
            }
            if status.eq_ignore_ascii_case("completed") {
                summary.completed += 1;
            }
        }
        summary
    }
}

/// Appointments grouped by status for the reports page, most frequent first.
pub fn status_breakdown(appointments: &[Appointment]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for appt in appointments {
        let status = match appt.status.trim() {
            "" => "Unknown".to_string(),
            s => s.to_string(),
        };
        match counts
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&status))
        {
            Some((_, n)) => *n += 1,
            None => counts.push((status, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
