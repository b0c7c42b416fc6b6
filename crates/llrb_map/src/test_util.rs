use simplelog::{Config, LevelFilter, TestLogger};

/// Route `log` output through the test harness. Safe to call from every test.
pub(crate) fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

mod tests {
    use super::init_logger;
    use crate::{Error, LlrbTreeMap};

    #[test]
    fn logger_survives_repeated_init() {
        init_logger();
        init_logger();
        log::debug!("logger installed");
        let map: LlrbTreeMap<u32, u32> = LlrbTreeMap::new();
        assert_eq!(map.min().err(), Some(Error::EmptyTree));
    }
}
