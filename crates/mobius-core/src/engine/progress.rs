#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    /// A non-fatal degeneracy the caller may want to surface.
    Warning(String),
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

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

    /// Runs `step` once per item inside a named phase, reporting one
    /// increment per item.
    pub fn run_phase<T, R>(
        &self,
        name: &'static str,
        items: &[T],
        mut step: impl FnMut(&T) -> R,
    ) -> Vec<R> {
        self.report(Progress::PhaseStart { name });
        self.report(Progress::TaskStart {
            total_steps: items.len() as u64,
        });
        let results = items
            .iter()
            .map(|item| {
                let r = step(item);
                self.report(Progress::TaskIncrement);
                r
            })
            .collect();
        self.report(Progress::TaskFinish);
        self.report(Progress::PhaseFinish);
        results
    }
}
