pub mod schedule;

pub use schedule::{InstallmentSchedule, ScheduledInstallment, MAX_SCHEDULE_MONTHS};
