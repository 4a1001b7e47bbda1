use chrono::{Duration, NaiveDate, NaiveDateTime};

use doctor_cell::models::Doctor;

use crate::models::Appointment;

/// Minimum spacing between two appointments on one doctor's schedule.
pub const MIN_SPACING_MINUTES: i64 = 30;

/// The working-hours window is half-open: starting exactly at
/// `work_start_time` is bookable, exactly at `work_end_time` is not.
pub fn within_working_hours(doctor: &Doctor, scheduled_at: NaiveDateTime) -> bool {
    let time = scheduled_at.time();
    doctor.work_start_time <= time && time < doctor.work_end_time
}

/// The doctor's bookable interval on `date`, as concrete instants.
pub fn working_day_window(doctor: &Doctor, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (
        date.and_time(doctor.work_start_time),
        date.and_time(doctor.work_end_time),
    )
}

/// First appointment strictly closer than the minimum spacing to the
/// candidate instant; exactly `MIN_SPACING_MINUTES` apart is legal.
/// `exclude_id` skips the candidate's own row on reschedules. Status is
/// not consulted: a cancelled appointment still holds its slot.
pub fn find_spacing_conflict(
    day_schedule: &[Appointment],
    scheduled_at: NaiveDateTime,
    exclude_id: Option<i32>,
) -> Option<&Appointment> {
    let min_spacing = Duration::minutes(MIN_SPACING_MINUTES);
    day_schedule.iter().find(|existing| {
        exclude_id != Some(existing.id)
            && (existing.scheduled_at - scheduled_at).abs() < min_spacing
    })
}
