//! Progress reporting

pub mod indicatif;

/// Something which can start tracking the progress of a known amount of work.
pub trait Progress {
    type Instance: ProgressBar;

    fn start(&self, work: usize) -> Self::Instance;
}

pub trait ProgressBar {
    fn tick(&mut self) {
        self.increment(1)
    }

    fn increment(&mut self, work: usize);

    fn finish(self);

    fn set_message(&mut self, msg: String);
}

impl Progress for () {
    type Instance = ();

    fn start(&self, _work: usize) -> Self::Instance {}
}

impl ProgressBar for () {
    fn increment(&mut self, _work: usize) {}

    fn finish(self) {}

    fn set_message(&mut self, _msg: String) {}
}

impl<P: Progress> Progress for Option<P> {
    type Instance = Option<P::Instance>;

    fn start(&self, work: usize) -> Self::Instance {
        self.as_ref().map(|progress| progress.start(work))
    }
}

impl<P: ProgressBar> ProgressBar for Option<P> {
    fn increment(&mut self, work: usize) {
        if let Some(bar) = self {
            bar.increment(work);
        }
    }

    fn finish(self) {
        if let Some(bar) = self {
            bar.finish();
        }
    }

    fn set_message(&mut self, msg: String) {
        if let Some(bar) = self {
            bar.set_message(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    pub struct Counting {
        work: usize,
        done: usize,
        message: Option<String>,
    }

    impl Progress for std::cell::RefCell<Vec<usize>> {
        type Instance = Counting;

        fn start(&self, work: usize) -> Self::Instance {
            self.borrow_mut().push(work);
            Counting {
                work,
                ..Default::default()
            }
        }
    }

    impl ProgressBar for Counting {
        fn increment(&mut self, work: usize) {
            self.done += work;
        }

        fn finish(self) {
            assert_eq!(self.work, self.done);
        }

        fn set_message(&mut self, msg: String) {
            self.message = Some(msg);
        }
    }

    #[test]
    fn optional_progress() {
        let progress = Some(std::cell::RefCell::new(Vec::<usize>::new()));
        let mut bar = progress.start(2);
        bar.set_message("a.yaml".into());
        bar.tick();
        bar.tick();

        assert_eq!(
            bar.as_ref().and_then(|bar| bar.message.as_deref()),
            Some("a.yaml")
        );
        bar.finish();

        assert_eq!(progress.map(|p| p.into_inner()), Some(vec![2]));
    }

    #[test]
    fn no_progress() {
        let progress: Option<()> = None;
        let mut bar = progress.start(10);
        bar.tick();
        assert!(bar.is_none());
        bar.finish();
    }
}
