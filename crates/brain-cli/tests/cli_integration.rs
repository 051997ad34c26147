use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn brain() -> Command {
    let mut cmd = Command::cargo_bin("brain").unwrap();
    cmd.env_remove("BRAIN_CONFIG").env_remove("BRAIN_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_str(&String::from_utf8_lossy(output)).expect("Failed to parse JSON output")
}

mod list_tests {
    use super::*;

    #[test]
    fn test_list_all() {
        let output = brain()
            .arg("list")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["count"], 6);
        assert_eq!(json["data"]["heading"], "All Content");
        assert_eq!(json["data"]["label"], "6 items saved");
        assert_eq!(json["data"]["items"][0]["id"], "1");
    }

    #[test]
    fn test_list_articles_in_order() {
        let output = brain()
            .args(["list", "--type", "article"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        let ids: Vec<_> = json["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "6"]);
        assert_eq!(json["data"]["heading"], "Article");
    }

    #[test]
    fn test_list_single_tweet_label() {
        let output = brain()
            .args(["list", "--type", "tweet"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["label"], "1 item saved");
        assert_eq!(json["data"]["items"][0]["type"], "tweet");
    }

    #[test]
    fn test_list_unknown_type_fails() {
        brain()
            .args(["list", "--type", "podcast"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("podcast"));
    }
}

mod share_tests {
    use super::*;

    #[test]
    fn test_print_item_without_url() {
        brain()
            .args(["share", "--id", "4", "--print"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "The Psychology of User Experience\n\n",
            ))
            .stdout(predicate::str::ends_with("user motivation...\n\n"))
            .stdout(predicate::str::contains("undefined").not());
    }

    #[test]
    fn test_print_item_with_url() {
        brain()
            .args(["share", "--id", "5", "--print"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with(
                "\n\nhttps://cssgrid-generator.netlify.app",
            ));
    }

    #[test]
    fn test_print_whole_store() {
        let output = brain()
            .args(["share", "--print"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Article: The Future of AI in Web Development\n"));
        assert!(text.contains("Tags: React, JavaScript, Frontend\n"));
        assert_eq!(text.matches("\n---\n\n").count(), 5);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let output = brain()
            .args(["share", "--id", "99", "--print"])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&output);
        assert!(!json["success"].as_bool().unwrap());
        assert!(json["error"].as_str().unwrap().contains("99"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_invalid_config_is_ignored() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, "this is = = not toml").unwrap();

        brain()
            .args(["--config", config.to_str().unwrap(), "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"count\":6"));
    }

    #[cfg(unix)]
    #[test]
    fn test_config_from_env() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.toml");
        let title_file = dir.path().join("title");
        fs::write(
            &config,
            format!(
                "[share]\ncommand = \"sh\"\nargs = [\"-c\", \"printf %s \\\"$BRAIN_SHARE_TITLE\\\" > '{0}.tmp' && mv '{0}.tmp' '{0}'\"]\n",
                title_file.display()
            ),
        )
        .unwrap();

        // The configured command takes over, so no clipboard confirmation.
        brain()
            .env("BRAIN_CONFIG", config.to_str().unwrap())
            .args(["share", "--id", "1"])
            .assert()
            .success()
            .stderr(predicate::str::contains("copied to clipboard").not());

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        while !title_file.exists() {
            assert!(std::time::Instant::now() < deadline, "share command never ran");
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert_eq!(
            fs::read_to_string(&title_file).unwrap(),
            "The Future of AI in Web Development"
        );
    }

    #[test]
    fn test_share_without_native_command_confirms_clipboard() {
        brain()
            .args(["--config", "/nonexistent/brain/config.toml", "share", "--id", "1"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Content copied to clipboard!"));
    }
}

#[test]
fn test_completions() {
    brain()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brain"));
}
