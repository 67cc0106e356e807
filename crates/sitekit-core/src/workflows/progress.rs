/// Progress events emitted by the carving pipeline.
///
/// Every pass reports the size of the working point set when it starts and
/// what survived when it finishes, so a front-end can show the carve
/// shrinking the lattice stage by stage.
#[derive(Debug, Clone)]
pub enum Progress {
    PassStart { name: &'static str, points: usize },
    PassFinish { points: usize },
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Optional observer for long-running workflows; a reporter without a
/// callback swallows every event.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
