mod date;
mod reminder;
mod shared;
mod validation;

pub use date::{compose_local, date_components, is_valid_date, is_valid_time, time_components};
pub use reminder::{Reminder, ReminderMethod, ReminderStatus};
pub use shared::entity::{Entity, ID};
pub use validation::{
    is_valid_email, is_valid_phone, validate_create, CreateReminderFields, FieldErrors, NewReminder,
};
