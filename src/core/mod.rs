pub mod aggregator;
pub mod book;
pub mod clock;
pub mod export;
pub mod log;
pub mod notify;
pub mod repository;
pub mod validate;

pub use aggregator::{DailyAggregator, SaveOutcome, SkipReason, TotalScope};
pub use book::{BookSettings, HourBook};
pub use clock::{Clock, FixedClock, LocalClock};
pub use notify::{CollectingNotifier, Notice, NoticeLevel, Notifier, NullNotifier};
pub use repository::{DeleteOutcome, RecordRepository};
pub use validate::validate;
