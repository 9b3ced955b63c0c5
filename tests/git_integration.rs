//! Integration tests against the real git program.
//!
//! These tests use real git repositories created via tempfile and drive the
//! action handlers through `SystemRunner`, checking the repository state
//! afterwards with plain `git` invocations.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use gitmenu::core::config::Settings;
use gitmenu::engine::actions::{basic, branch, repo as repository};
use gitmenu::engine::{ActionContext, ActionResult, Outcome, CANCELLED};
use gitmenu::git::{discover_repo, Git, ProcessRunner, SystemRunner, ERROR_TAG};
use gitmenu::ui::input::ScriptedInput;

/// Test fixture that creates a real git repository.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository with an initial commit.
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "README.md"]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);

        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn commit_file(&self, path: &str, content: &str, message: &str) {
        std::fs::write(self.path().join(path), content).unwrap();
        run_git(self.path(), &["add", path]);
        run_git(self.path(), &["commit", "-m", message]);
    }

    fn git(&self) -> Git {
        Git::new(Box::new(SystemRunner), "git", self.path())
    }

    fn head(&self) -> String {
        run_git(self.path(), &["rev-parse", "HEAD"])
    }

    fn tracked(&self) -> Vec<String> {
        run_git(self.path(), &["ls-files"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run one handler with scripted answers.
    fn run(
        &self,
        handler: fn(&mut ActionContext<'_>) -> ActionResult,
        lines: &[&str],
    ) -> Outcome {
        let settings = Settings::default();
        let mut git = self.git();
        let mut input = lines
            .iter()
            .fold(ScriptedInput::new(), |input, line| input.line(*line));
        let mut out: Vec<u8> = Vec::new();
        let mut ctx = ActionContext::new(&mut git, &mut input, &mut out, &settings);
        handler(&mut ctx).expect("handler failed")
    }
}

fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn footer(outcome: Outcome) -> String {
    match outcome {
        Outcome::Footer(text) => text,
        Outcome::Aborted => panic!("unexpected abort"),
    }
}

mod runner {
    use super::*;

    #[test]
    fn stdout_then_stderr() {
        let dir = TempDir::new().unwrap();
        let args = ["-c".to_string(), "printf A; printf B >&2".to_string()];
        let result = SystemRunner.run("sh", &args, dir.path()).unwrap();
        assert_eq!(result.text, "A\nB");
        assert!(!result.decode_failed);
        assert!(result.success());
    }

    #[test]
    fn stdout_only() {
        let dir = TempDir::new().unwrap();
        let args = ["-c".to_string(), "printf 'A\\n'".to_string()];
        let result = SystemRunner.run("sh", &args, dir.path()).unwrap();
        assert_eq!(result.text, "A");
    }

    #[test]
    fn failing_command_is_still_text() {
        let dir = TempDir::new().unwrap();
        let args = ["-c".to_string(), "echo nope >&2; exit 3".to_string()];
        let result = SystemRunner.run("sh", &args, dir.path()).unwrap();
        assert_eq!(result.text, "nope");
        assert_eq!(result.exit_code, Some(3));
        assert!(!result.success());
    }

    #[test]
    fn missing_program() {
        let dir = TempDir::new().unwrap();
        let err = SystemRunner
            .run("gitmenu-no-such-program", &[], dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("gitmenu-no-such-program"));
    }

    #[test]
    fn preflight_reports_version() {
        let repo = TestRepo::new();
        let version = repo.git().preflight().unwrap();
        assert!(version.starts_with("git version"));
    }
}

mod discovery {
    use super::*;

    #[test]
    fn finds_workdir_from_subdirectory() {
        let repo = TestRepo::new();
        let sub = repo.path().join("src/deep");
        std::fs::create_dir_all(&sub).unwrap();

        let location = discover_repo(&sub).unwrap();
        assert_eq!(
            location.workdir.canonicalize().unwrap(),
            repo.path().canonicalize().unwrap()
        );
        assert!(location.git_dir.ends_with(".git") || location.git_dir.ends_with(".git/"));
    }

    #[test]
    fn outside_any_repository() {
        let dir = TempDir::new().unwrap();
        let isolated = dir.path().join("isolated");
        std::fs::create_dir_all(&isolated).unwrap();
        // A temp dir may itself sit inside a repository on some machines.
        if let Some(location) = discover_repo(&isolated) {
            assert!(!location.workdir.starts_with(&isolated));
        }
    }
}

mod actions {
    use super::*;

    #[test]
    fn batch_remove_skips_untracked() {
        let repo = TestRepo::new();
        repo.commit_file("x.txt", "x", "add x");
        repo.commit_file("y.txt", "y", "add y");

        let text = footer(repo.run(basic::remove_from_repo, &["x.txt, missing.txt, y.txt"]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3, "{text}");
        assert!(lines[0].contains("x.txt"));
        assert_eq!(
            lines[1],
            format!("{ERROR_TAG} File missing.txt is not found or not tracked.")
        );
        assert!(lines[2].contains("y.txt"));

        assert_eq!(repo.tracked(), ["README.md"]);
        assert!(repo.path().join("x.txt").exists());
    }

    #[test]
    fn reset_by_index() {
        let repo = TestRepo::new();
        repo.commit_file("a.txt", "1", "first");
        let target = repo.head();
        repo.commit_file("a.txt", "2", "second");
        repo.commit_file("a.txt", "3", "third");

        // Index 2 is two commits back from HEAD.
        let text = footer(repo.run(basic::reset_to_commit, &["2", "yes"]));
        assert!(text.contains("HEAD is now at"), "{text}");
        assert_eq!(repo.head(), target);
        assert_eq!(std::fs::read_to_string(repo.path().join("a.txt")).unwrap(), "1");
    }

    #[test]
    fn declined_reset_leaves_head() {
        let repo = TestRepo::new();
        repo.commit_file("a.txt", "1", "first");
        let before = repo.head();

        let text = footer(repo.run(basic::reset_to_commit, &["1", "YES please"]));
        assert_eq!(text, CANCELLED);
        assert_eq!(repo.head(), before);
    }

    #[test]
    fn out_of_range_reset_runs_nothing() {
        let repo = TestRepo::new();
        let before = repo.head();
        let text = footer(repo.run(basic::reset_to_commit, &["7"]));
        assert!(text.starts_with("Invalid input:"));
        assert_eq!(repo.head(), before);
    }

    #[test]
    fn commit_message_carries_timestamp() {
        let repo = TestRepo::new();
        std::fs::write(repo.path().join("b.txt"), "b").unwrap();
        run_git(repo.path(), &["add", "b.txt"]);

        repo.run(basic::commit, &["add b"]);
        let subject = run_git(repo.path(), &["log", "-1", "--format=%s"]);
        assert!(subject.starts_with("add b ("), "{subject}");
        assert!(subject.ends_with(')'));
    }

    #[test]
    fn create_and_force_delete_branch() {
        let repo = TestRepo::new();
        footer(repo.run(branch::create, &["topic"]));
        assert!(run_git(repo.path(), &["branch", "--list", "topic"]).contains("topic"));

        let text = footer(repo.run(branch::force_delete, &["topic", "no"]));
        assert_eq!(text, CANCELLED);
        assert!(run_git(repo.path(), &["branch", "--list", "topic"]).contains("topic"));

        footer(repo.run(branch::force_delete, &["topic", "yes"]));
        assert!(run_git(repo.path(), &["branch", "--list", "topic"]).is_empty());
    }

    #[test]
    fn git_failure_becomes_footer() {
        let repo = TestRepo::new();
        let text = footer(repo.run(branch::switch, &["does-not-exist"]));
        assert!(text.contains("does-not-exist"), "{text}");
    }

    #[test]
    fn clear_repository_keeps_files() {
        let repo = TestRepo::new();
        repo.commit_file("keep.txt", "k", "add keep");

        let text = footer(repo.run(repository::clear, &["yes"]));
        assert!(text.starts_with("rm 'README.md'"), "{text}");
        assert!(text.contains("All files kept in the working directory."));
        assert!(text.ends_with("Repository index cleared."));
        assert!(repo.path().join("keep.txt").exists());
        assert!(repo.path().join("README.md").exists());
    }
}
