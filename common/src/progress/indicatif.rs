use super::{Progress, ProgressBar};
use indicatif::{MultiProgress, ProgressStyle};

const TEMPLATE: &str = "{msg} {wide_bar} {pos}/{len} ({eta})";

fn new_bar(work: usize) -> indicatif::ProgressBar {
    let bar = indicatif::ProgressBar::new(work.try_into().unwrap_or(u64::MAX));
    match ProgressStyle::default_bar().template(TEMPLATE) {
        Ok(style) => bar.set_style(style),
        Err(err) => log::debug!("Invalid progress template: {err}"),
    }
    bar
}

/// Progress bars attached to the [`MultiProgress`] which also receives the log output.
impl Progress for MultiProgress {
    type Instance = indicatif::ProgressBar;

    fn start(&self, work: usize) -> Self::Instance {
        self.add(new_bar(work))
    }
}

impl ProgressBar for indicatif::ProgressBar {
    fn increment(&mut self, work: usize) {
        self.inc(work.try_into().unwrap_or(u64::MAX))
    }

    fn finish(self) {
        self.finish_and_clear()
    }

    fn set_message(&mut self, msg: String) {
        indicatif::ProgressBar::set_message(self, msg)
    }
}
