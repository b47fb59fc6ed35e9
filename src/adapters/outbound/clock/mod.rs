/// Clock adapters supplying the reference date
mod system_clock;

pub use system_clock::{FixedClock, SystemClock};
