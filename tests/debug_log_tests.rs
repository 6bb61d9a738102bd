use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

mod mock_transport;

use mock_transport::{mock_client, MockTransport};

// Collects every debug record emitted by this test binary
struct CaptureLogger;

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

#[tokio::test]
async fn test_debug_log_redacts_credentials() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let transport = MockTransport::new().respond_json(200, r#"{"syntaxWarnings":["synm001"]}"#);
    let client = mock_client(transport).with_debug(true);
    client.get("address/syntax/nobody.example.com", &[]).await.unwrap();

    let records = RECORDS.lock().unwrap().clone();
    let request_line = records
        .iter()
        .find(|line| line.starts_with("GET https://adc.maileon.com/svc/2.0/address/syntax/nobody.example.com"))
        .expect("request should be logged");
    assert!(request_line.contains("authorization: ***redacted***"));
    assert!(request_line.contains("accept: application/json"));

    // base64("user:pass")
    assert!(records.iter().all(|line| !line.contains("dXNlcjpwYXNz") && !line.contains("Basic")));
    assert!(records.iter().any(|line| line.starts_with("Result:\nstatus code: 200") && line.contains("synm001")));
}
