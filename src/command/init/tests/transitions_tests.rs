use std::fs;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use assert_fs::TempDir;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::json;
use speculoos::prelude::*;

use crate::command::init::config::CONFIG_FILE_NAME;
use crate::command::init::prompts::MockPrompt;
use crate::command::init::runtime_config::NUXT_CONFIG_FILE_NAME;
use crate::command::init::{Init, InitError};
use crate::utils::effect::exec::MockExecCommand;
use crate::utils::effect::remove_dir::NativeRemoveDirTree;
use crate::utils::git::Git;
use crate::utils::git::test_support::success_output;
use crate::{MevnErrorCode, MevnResult};

const NUXT_CONFIG: &str = "export default {\n  mode: 'spa',\n  head: { title: 'app' },\n}\n";

struct Workspace {
    _guard: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn project(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

#[fixture]
fn workspace() -> Workspace {
    let guard = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(guard.path().to_path_buf()).unwrap();
    Workspace {
        _guard: guard,
        root,
    }
}

type Calls = Arc<Mutex<Vec<String>>>;

/// A git that records every invocation and lays out a fake boilerplate on clone
fn fake_git(calls: &Calls) -> Git<MockExecCommand> {
    fake_git_with_nuxt_config(calls, NUXT_CONFIG)
}

fn fake_git_with_nuxt_config(calls: &Calls, nuxt_config: &'static str) -> Git<MockExecCommand> {
    let calls = Arc::clone(calls);
    let mut exec = MockExecCommand::new();
    exec.expect_exec_command().returning(move |_, args, cwd| {
        calls.lock().unwrap().push(args.join(" "));
        if args.first() == Some(&"clone") {
            let project_dir = cwd.join(args[2]);
            fs::create_dir_all(project_dir.join(".git/objects")).unwrap();
            fs::write(project_dir.join(".git/HEAD"), "ref: refs/heads/master").unwrap();
            fs::write(
                project_dir.join(".git/config"),
                "[remote \"origin\"]\n\turl = https://github.com/madlabsinc/mevn-nuxt-boilerplate.git\n",
            )
            .unwrap();
            fs::write(project_dir.join("package.json"), "{}").unwrap();
            fs::write(project_dir.join(NUXT_CONFIG_FILE_NAME), nuxt_config).unwrap();
        }
        Ok(success_output())
    });
    Git::new(Utf8PathBuf::from("git"), exec)
}

fn recorded(calls: &Calls) -> Vec<String> {
    calls.lock().unwrap().clone()
}

fn read_config(project_dir: &Utf8Path) -> serde_json::Value {
    let raw = fs::read_to_string(project_dir.join(CONFIG_FILE_NAME)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn silent_prompt() -> MockPrompt {
    let mut prompt = MockPrompt::new();
    prompt.expect_select().never();
    prompt.expect_confirm().never();
    prompt.expect_input().never();
    prompt
}

async fn run(args: &[&str], workspace: &Workspace, prompt: &MockPrompt, git: &Git<MockExecCommand>) -> MevnResult<()> {
    let init = Init::try_parse_from(std::iter::once("init").chain(args.iter().copied())).unwrap();
    init.run_in(workspace.root.clone(), prompt, git, &NativeRemoveDirTree)
        .await
        .map(|_| ())
}

#[rstest]
#[tokio::test]
async fn test_basic_template_end_to_end(workspace: Workspace) {
    let calls = Calls::default();
    let git = fake_git(&calls);
    let mut prompt = MockPrompt::new();
    prompt
        .expect_select()
        .times(1)
        .returning(|_, _, _| Ok(Some(0)));
    prompt.expect_confirm().never();

    run(&["my-app"], &workspace, &prompt, &git).await.unwrap();

    let project_dir = workspace.project("my-app");
    assert_eq!(
        read_config(&project_dir),
        json!({ "name": "my-app", "template": "basic" })
    );
    assert_that!(project_dir.join(".git/HEAD").exists()).is_false();
    assert_eq!(
        recorded(&calls),
        vec![
            "--help".to_string(),
            "clone https://github.com/madlabsinc/mevn-boilerplate.git my-app".to_string(),
            "init".to_string(),
            "add .".to_string(),
            "commit -m Initial commit -m From mevn-cli".to_string(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn test_nuxt_with_pwa_and_universal_mode(workspace: Workspace) {
    let calls = Calls::default();
    let git = fake_git(&calls);
    let mut prompt = MockPrompt::new();
    prompt
        .expect_select()
        .times(1)
        .withf(|message, _, _| message.contains("template"))
        .returning(|_, _, _| Ok(Some(3)));
    prompt
        .expect_confirm()
        .times(1)
        .returning(|_, _| Ok(true));
    prompt
        .expect_select()
        .times(1)
        .withf(|message, _, _| message.contains("mode"))
        .returning(|_, _, _| Ok(Some(0)));

    run(&["shop"], &workspace, &prompt, &git).await.unwrap();

    let project_dir = workspace.project("shop");
    assert_eq!(
        read_config(&project_dir),
        json!({ "name": "shop", "template": "nuxt", "isPwa": true })
    );
    assert_eq!(
        fs::read_to_string(project_dir.join(NUXT_CONFIG_FILE_NAME)).unwrap(),
        "export default {\n  mode: 'universal',\n  head: { title: 'app' },\n}\n"
    );
    assert_that!(recorded(&calls)).contains(
        "clone https://github.com/madlabsinc/mevn-nuxt-boilerplate.git shop".to_string(),
    );
}

#[rstest]
#[tokio::test]
async fn test_nuxt_spa_mode_leaves_runtime_config_alone(workspace: Workspace) {
    let calls = Calls::default();
    let git = fake_git(&calls);

    run(
        &["shop", "--template", "nuxt", "--pwa", "false", "--mode", "spa"],
        &workspace,
        &silent_prompt(),
        &git,
    )
    .await
    .unwrap();

    let project_dir = workspace.project("shop");
    assert_eq!(
        read_config(&project_dir),
        json!({ "name": "shop", "template": "nuxt" })
    );
    assert_eq!(
        fs::read_to_string(project_dir.join(NUXT_CONFIG_FILE_NAME)).unwrap(),
        NUXT_CONFIG
    );
}

#[rstest]
#[tokio::test]
async fn test_nuxt_flags_are_ignored_for_other_templates(workspace: Workspace) {
    let calls = Calls::default();
    let git = fake_git(&calls);

    run(
        &["api", "--template", "graphql", "--pwa", "--mode", "universal"],
        &workspace,
        &silent_prompt(),
        &git,
    )
    .await
    .unwrap();

    let project_dir = workspace.project("api");
    assert_eq!(
        read_config(&project_dir),
        json!({ "name": "api", "template": "graphql" })
    );
    assert_eq!(
        fs::read_to_string(project_dir.join(NUXT_CONFIG_FILE_NAME)).unwrap(),
        NUXT_CONFIG
    );
}

#[rstest]
#[case::no_mode_line("export default {\n  head: { title: 'app' },\n}\n")]
#[case::empty_file("")]
#[tokio::test]
async fn test_missing_mode_line_still_replaces_history(
    workspace: Workspace,
    #[case] nuxt_config: &'static str,
) {
    let calls = Calls::default();
    let git = fake_git_with_nuxt_config(&calls, nuxt_config);

    let err = run(
        &["shop", "--template", "nuxt", "--pwa", "false", "--mode", "universal"],
        &workspace,
        &silent_prompt(),
        &git,
    )
    .await
    .unwrap_err();

    assert_that!(err.code()).is_equal_to(Some(MevnErrorCode::E006));
    let project_dir = workspace.project("shop");
    assert_that!(project_dir.join(".git/config").exists()).is_false();
    assert_that!(project_dir.join(".git/HEAD").exists()).is_false();
    assert_eq!(
        fs::read_to_string(project_dir.join(NUXT_CONFIG_FILE_NAME)).unwrap(),
        nuxt_config
    );
    assert_eq!(
        read_config(&project_dir),
        json!({ "name": "shop", "template": "nuxt" })
    );
    assert_eq!(
        recorded(&calls)[2..],
        [
            "init".to_string(),
            "add .".to_string(),
            "commit -m Initial commit -m From mevn-cli".to_string(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn test_stray_arguments_stop_before_anything_runs(workspace: Workspace) {
    let mut exec = MockExecCommand::new();
    exec.expect_exec_command().never();
    let git = Git::new(Utf8PathBuf::from("git"), exec);

    let err = run(&["my", "app"], &workspace, &silent_prompt(), &git)
        .await
        .unwrap_err();

    assert_that!(err.code()).is_equal_to(Some(MevnErrorCode::E001));
    assert_that!(workspace.project("my").exists()).is_false();
}

#[rstest]
#[tokio::test]
async fn test_invalid_name_stops_before_anything_runs(workspace: Workspace) {
    let mut exec = MockExecCommand::new();
    exec.expect_exec_command().never();
    let git = Git::new(Utf8PathBuf::from("git"), exec);

    let err = run(&["MyApp"], &workspace, &silent_prompt(), &git)
        .await
        .unwrap_err();

    assert_that!(err.code()).is_equal_to(Some(MevnErrorCode::E002));
}

#[rstest]
#[tokio::test]
async fn test_existing_directory_is_refused(workspace: Workspace) {
    fs::create_dir_all(workspace.project("taken")).unwrap();
    let mut exec = MockExecCommand::new();
    exec.expect_exec_command().never();
    let git = Git::new(Utf8PathBuf::from("git"), exec);

    let err = run(&["taken"], &workspace, &silent_prompt(), &git)
        .await
        .unwrap_err();

    assert_that!(err.code()).is_equal_to(Some(MevnErrorCode::E003));
    assert!(matches!(
        err.downcast_ref::<InitError>(),
        Some(InitError::DirectoryExists { path }) if path == "taken"
    ));
}

#[rstest]
#[tokio::test]
async fn test_missing_git_aborts_before_clone(workspace: Workspace) {
    let calls = Calls::default();
    let recorder = Arc::clone(&calls);
    let mut exec = MockExecCommand::new();
    exec.expect_exec_command().returning(move |_, args, _| {
        recorder.lock().unwrap().push(args.join(" "));
        Err(anyhow!("No such file or directory (os error 2)"))
    });
    let git = Git::new(Utf8PathBuf::from("/nowhere/git"), exec);

    let err = run(&["my-app", "--template", "basic"], &workspace, &silent_prompt(), &git)
        .await
        .unwrap_err();

    assert_that!(err.code()).is_equal_to(Some(MevnErrorCode::E004));
    assert_eq!(recorded(&calls), vec!["--help".to_string()]);
}

#[cfg(unix)]
#[rstest]
#[tokio::test]
async fn test_failed_clone_writes_no_config(workspace: Workspace) {
    use crate::utils::git::test_support::failure_output;

    let calls = Calls::default();
    let recorder = Arc::clone(&calls);
    let mut exec = MockExecCommand::new();
    exec.expect_exec_command().returning(move |_, args, _| {
        recorder.lock().unwrap().push(args.join(" "));
        if args.first() == Some(&"clone") {
            Ok(failure_output("fatal: unable to access repository"))
        } else {
            Ok(success_output())
        }
    });
    let git = Git::new(Utf8PathBuf::from("git"), exec);

    let err = run(&["my-app", "--template", "pwa"], &workspace, &silent_prompt(), &git)
        .await
        .unwrap_err();

    assert_that!(err.code()).is_equal_to(Some(MevnErrorCode::E005));
    assert_that!(workspace.project("my-app").join(CONFIG_FILE_NAME).exists()).is_false();
    assert_that!(recorded(&calls).len()).is_equal_to(2);
}

#[rstest]
#[tokio::test]
async fn test_backing_out_of_template_prompt(workspace: Workspace) {
    let mut exec = MockExecCommand::new();
    exec.expect_exec_command().never();
    let git = Git::new(Utf8PathBuf::from("git"), exec);
    let mut prompt = MockPrompt::new();
    prompt.expect_select().times(1).returning(|_, _, _| Ok(None));

    let err = run(&["my-app"], &workspace, &prompt, &git).await.unwrap_err();

    assert_that!(err.code()).is_equal_to(Some(MevnErrorCode::E007));
}

/// Runs the real git, cloning from a local repository instead of the network
#[cfg(unix)]
struct LocalOriginGit {
    origin: Utf8PathBuf,
}

#[cfg(unix)]
#[async_trait::async_trait]
impl crate::utils::effect::exec::ExecCommand for LocalOriginGit {
    type Error = std::io::Error;
    async fn exec_command<'a>(
        &self,
        exe: &Utf8PathBuf,
        args: &[&'a str],
        current_dir: &Utf8PathBuf,
    ) -> Result<std::process::Output, Self::Error> {
        let args = match args {
            ["clone", _, destination] => vec!["clone", self.origin.as_str(), *destination],
            _ => args.to_vec(),
        };
        tokio::process::Command::new(exe)
            .envs(GIT_IDENTITY)
            .args(&args)
            .current_dir(current_dir)
            .output()
            .await
    }
}

#[cfg(unix)]
const GIT_IDENTITY: [(&str, &str); 6] = [
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_AUTHOR_NAME", "mevn"),
    ("GIT_AUTHOR_EMAIL", "mevn@example.com"),
    ("GIT_COMMITTER_NAME", "mevn"),
    ("GIT_COMMITTER_EMAIL", "mevn@example.com"),
];

#[cfg(unix)]
fn git_in(dir: &Utf8Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .envs(GIT_IDENTITY)
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success(), "git {:?} failed: {:?}", args, output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[cfg(unix)]
#[rstest]
#[tokio::test]
async fn test_real_git_leaves_a_single_commit(workspace: Workspace) {
    let Ok(git_exe) = which::which("git") else {
        return;
    };
    let git_exe = Utf8PathBuf::from_path_buf(git_exe).unwrap();

    let origin = workspace.project("boilerplate-origin");
    fs::create_dir_all(&origin).unwrap();
    git_in(&origin, &["init", "--quiet"]);
    fs::write(origin.join("package.json"), "{}\n").unwrap();
    git_in(&origin, &["add", "."]);
    git_in(&origin, &["commit", "--quiet", "-m", "first"]);
    fs::write(origin.join("README.md"), "# boilerplate\n").unwrap();
    git_in(&origin, &["add", "."]);
    git_in(&origin, &["commit", "--quiet", "-m", "second"]);
    assert_eq!(git_in(&origin, &["rev-list", "--count", "HEAD"]), "2");

    let git = Git::new(git_exe, LocalOriginGit { origin });
    let init = Init::try_parse_from(["init", "app", "--template", "basic"]).unwrap();
    init.run_in(
        workspace.root.clone(),
        &silent_prompt(),
        &git,
        &NativeRemoveDirTree,
    )
    .await
    .unwrap();

    let project_dir = workspace.project("app");
    assert_eq!(git_in(&project_dir, &["rev-list", "--count", "HEAD"]), "1");
    assert_eq!(git_in(&project_dir, &["remote"]), "");
    assert_eq!(
        git_in(&project_dir, &["log", "-1", "--format=%s%n%n%b"]),
        "Initial commit\n\nFrom mevn-cli"
    );
    assert_that!(git_in(&project_dir, &["ls-files"])).contains(CONFIG_FILE_NAME);
}
