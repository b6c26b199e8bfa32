#[cfg(test)]
mod common_tests {
    use std::time::Duration;
    use crate::common::common::{parse_log_level, shutdown_waiting};
    use crate::common::structs::custom_error::CustomError;
    use crate::common::traits::output_sink::{MockOutputSink, OutputSink};

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info"), Some(log::LevelFilter::Info));
        assert_eq!(parse_log_level("trace"), Some(log::LevelFilter::Trace));
        assert_eq!(parse_log_level("off"), Some(log::LevelFilter::Off));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level("INFO"), None);
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not create config.toml file");
        assert_eq!(format!("{}", error), "could not create config.toml file");
    }

    #[test]
    fn test_mock_sink_receives_messages() {
        let mut sink = MockOutputSink::new();
        sink.expect_print()
            .withf(|message: &str| message.contains("a.bin"))
            .times(1)
            .return_const(());
        sink.expect_print_err().times(0);

        sink.print("peer joined swarm for a.bin");
    }

    #[tokio::test]
    async fn test_shutdown_waiting_times_out() {
        let (_tx, mut rx) = tokio::sync::watch::channel(false);
        assert!(!shutdown_waiting(Duration::from_millis(10), &mut rx).await);
    }

    #[tokio::test]
    async fn test_shutdown_waiting_signalled() {
        let (tx, mut rx) = tokio::sync::watch::channel(false);
        let waiter = tokio::spawn(async move {
            shutdown_waiting(Duration::from_secs(30), &mut rx).await
        });
        tx.send(true).unwrap();
        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn test_shutdown_waiting_sender_dropped() {
        let (tx, mut rx) = tokio::sync::watch::channel(false);
        drop(tx);
        assert!(shutdown_waiting(Duration::from_secs(30), &mut rx).await);
    }
}
