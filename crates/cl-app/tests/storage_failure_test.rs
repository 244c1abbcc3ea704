//! Storage failures degrade to defaults and leave a trace in the log.

use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock};

use cl_app::{AppContext, AppDeps};
use cl_core::profile::{EducationLevel, Gender, IncomeGroup, Profile};
use cl_core::Theme;
use cl_infra::{CannedCounsel, SharedMemoryStore, SystemClock};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct SharedLogBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedLogBuffer {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            buffer: self.buffer.clone(),
        }
    }
}

struct SharedLogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

static LOG_BUFFER: OnceLock<Arc<Mutex<Vec<u8>>>> = OnceLock::new();

fn init_test_tracing() -> Arc<Mutex<Vec<u8>>> {
    LOG_BUFFER
        .get_or_init(|| {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            let subscriber = tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::new("warn"))
                .with_writer(SharedLogBuffer {
                    buffer: buffer.clone(),
                })
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .expect("set global tracing subscriber");
            buffer
        })
        .clone()
}

fn logs(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8_lossy(&buffer.lock().unwrap()).into_owned()
}

fn profile() -> Profile {
    Profile {
        name: "Ravi".to_string(),
        age: 28,
        gender: Gender::Male,
        pincode: "560001".to_string(),
        district: "Bengaluru Urban".to_string(),
        income_group: IncomeGroup::Lmig,
        caste: None,
        education: EducationLevel::Diploma,
        aadhaar: "121212121212".to_string(),
        pan: None,
        is_registered: true,
    }
}

#[test]
fn quota_exceeded_is_logged_and_session_continues() {
    let buffer = init_test_tracing();

    // Room for a theme preference but never for a full profile.
    let shared = SharedMemoryStore::with_quota(48);
    let ctx = AppContext::new(AppDeps {
        store: Arc::new(shared.open_handle()),
        counsel: Arc::new(CannedCounsel::new()),
        clock: Arc::new(SystemClock),
    });

    assert!(ctx.preferences().set_theme(Theme::Dark));
    assert!(!ctx.profiles().save(profile()));

    // Session copy is still usable.
    assert!(ctx.profiles().is_registered());
    assert_eq!(ctx.preferences().theme(), Theme::Dark);

    let output = logs(&buffer);
    assert!(output.contains("Failed to write storage value"), "logs: {output}");
    assert!(output.contains("civilink-user"), "logs: {output}");
}
