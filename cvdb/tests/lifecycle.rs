use chrono::NaiveDate;
use cvdb_walker::{
    lifecycle::{Error, Lifecycle, Options, Stage},
    source::{FetchError, GitFetcher},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Create a git repository holding the given files, in a single commit.
fn create_origin(base: &Path, files: &[(&str, &str)]) -> PathBuf {
    let origin = base.join("origin");
    let repo = git2::Repository::init(&origin).expect("init repository");

    for (name, content) in files {
        let path = origin.join(name);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(path, content).expect("write file");
    }

    let mut index = repo.index().expect("index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("add files");
    index.write().expect("write index");
    let tree = repo
        .find_tree(index.write_tree().expect("write tree"))
        .expect("find tree");
    let signature = git2::Signature::now("Test", "test@example.com").expect("signature");
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        "Initial commit",
        &tree,
        &[],
    )
    .expect("commit");

    origin
}

fn options(base: &Path, repository: &Path) -> Options {
    let output_dir = base.join("out");
    fs::create_dir_all(&output_dir).expect("create output dir");

    Options {
        repository: repository.to_string_lossy().into_owned(),
        work_dir: base.join("tmp").join("data"),
        output_dir,
        ..Default::default()
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 4, 19).expect("valid date")
}

#[test]
fn convert_local_repository() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().expect("tempdir");
    let origin = create_origin(
        dir.path(),
        &[
            ("README.md", "# Open cloud vulnerability database\n"),
            (
                "vulnerabilities/a.yaml",
                "title: Foo\nseverity: high\naffectedPlatforms: [aws, azure, gcp]\n",
            ),
            ("vulnerabilities/b.yaml", "title: Bar\n"),
            ("vulnerabilities/sub/c.yaml", "title: Baz\n"),
        ],
    );

    let options = options(dir.path(), &origin);
    let work_dir = options.work_dir.clone();

    // leftovers of a previous run
    fs::create_dir_all(work_dir.join("stale")).expect("create stale dir");

    let mut lifecycle = Lifecycle::new(options, GitFetcher).with_date(date());
    let outcome = lifecycle.run().expect("run");

    assert_eq!(lifecycle.stage(), Stage::Finished);
    assert_eq!(outcome.records, 3);
    assert_eq!(
        outcome.output,
        dir.path().join("out").join("20230419_vulnerabilities.csv")
    );
    assert!(!work_dir.exists());

    let csv = fs::read_to_string(&outcome.output).expect("read output");
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.starts_with("\"Title\",\"Severity\",\"Published At\",\"Diclosed At\","));
    assert!(csv.contains(
        "\"Foo\",\"high\",\"\",\"\",\"aws,azure,gcp\",\"https://www.cloudvulndb.org/a\","
    ));
}

#[test]
fn fetch_failure_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = options(dir.path(), &dir.path().join("unused"));
    let output_dir = options.output_dir.clone();

    let failing = |location: &str, _: &Path| -> Result<(), FetchError> {
        Err(FetchError::Clone {
            location: location.to_string(),
            source: git2::Error::from_str("simulated network error"),
        })
    };

    let mut lifecycle = Lifecycle::new(options, failing).with_date(date());
    let result = lifecycle.run();

    assert!(matches!(result, Err(Error::Fetch(FetchError::Clone { .. }))));
    assert_eq!(lifecycle.stage(), Stage::Cleaned);
    assert!(!output_dir.join("20230419_vulnerabilities.csv").exists());
}

#[test]
fn missing_repository() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = options(dir.path(), &dir.path().join("no-such-repository"));
    let output_dir = options.output_dir.clone();

    let mut lifecycle = Lifecycle::new(options, GitFetcher).with_date(date());

    assert!(matches!(lifecycle.run(), Err(Error::Fetch(_))));
    assert_eq!(fs::read_dir(output_dir).expect("read output dir").count(), 0);
}

#[test]
fn repository_without_advisories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let origin = create_origin(dir.path(), &[("README.md", "nothing here\n")]);

    let mut lifecycle =
        Lifecycle::new(options(dir.path(), &origin), GitFetcher).with_date(date());

    assert!(matches!(
        lifecycle.run(),
        Err(Error::Fetch(FetchError::MissingDirectory { .. }))
    ));
}

#[test]
fn decode_failure_aborts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let origin = create_origin(
        dir.path(),
        &[
            ("vulnerabilities/a.yaml", "title: Foo\n"),
            ("vulnerabilities/notes.txt", "just some notes\n"),
        ],
    );

    let mut lifecycle =
        Lifecycle::new(options(dir.path(), &origin), GitFetcher).with_date(date());

    assert!(matches!(lifecycle.run(), Err(Error::Parse(_))));
    assert_eq!(lifecycle.stage(), Stage::Fetched);
    assert!(
        !dir.path()
            .join("out")
            .join("20230419_vulnerabilities.csv")
            .exists()
    );
}
