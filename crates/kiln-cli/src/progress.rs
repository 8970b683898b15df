//! Spinner around archive downloads.

use std::path::PathBuf;

use indicatif::ProgressBar;

use kiln_core::{application::ArchiveFetcher, error::KilnResult};

/// Shows `bar` while the wrapped fetcher downloads and extracts.
pub struct SpinningFetcher<F> {
    inner: F,
    bar: ProgressBar,
}

impl<F: ArchiveFetcher> SpinningFetcher<F> {
    pub fn new(inner: F, bar: ProgressBar) -> Self {
        Self { inner, bar }
    }
}

impl<F: ArchiveFetcher> ArchiveFetcher for SpinningFetcher<F> {
    fn fetch_and_extract(&self, url: &str) -> KilnResult<PathBuf> {
        self.bar.set_message(format!("Downloading {url}"));
        self.bar.reset_elapsed();
        let result = self.inner.fetch_and_extract(url);
        self.bar.finish_and_clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::application::ApplicationError;

    struct Fixed(KilnResult<PathBuf>);

    impl ArchiveFetcher for Fixed {
        fn fetch_and_extract(&self, _url: &str) -> KilnResult<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn passes_result_through() {
        let ok = SpinningFetcher::new(Fixed(Ok(PathBuf::from("/t/template"))), ProgressBar::hidden());
        assert_eq!(ok.fetch_and_extract("u").unwrap(), PathBuf::from("/t/template"));

        let failing = SpinningFetcher::new(
            Fixed(Err(ApplicationError::ArchiveFetch {
                url: "u".into(),
                status: Some(404),
                reason: "HTTP 404".into(),
            }
            .into())),
            ProgressBar::hidden(),
        );
        assert!(failing.fetch_and_extract("u").is_err());
    }

    #[test]
    fn spinner_finished_after_fetch() {
        let bar = ProgressBar::hidden();
        let f = SpinningFetcher::new(Fixed(Ok(PathBuf::new())), bar.clone());
        f.fetch_and_extract("u").unwrap();
        assert!(bar.is_finished());
    }
}
