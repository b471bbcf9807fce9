use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use ghiso_core::now_in;
use ghiso_finance::{ChatReply, Chatbot, TransactionStore};
use rand::Rng;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::state::{self, JsonFileStore};

/// Plain-text transcript, one file per local day under `~/.ghiso/chat/`.
struct ChatLog {
    dir: PathBuf,
    tz: Tz,
}

impl ChatLog {
    fn open(tz: Tz) -> Result<Self> {
        let dir = state::ensure_ghiso_home()?.join("chat");
        Self::in_dir(dir, tz)
    }

    fn in_dir(dir: PathBuf, tz: Tz) -> Result<Self> {
        std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { dir, tz })
    }

    /// File for the local day containing `at`.
    fn path_at(&self, at: DateTime<Utc>) -> PathBuf {
        day_file(&self.dir, self.tz, at)
    }

    fn append_user(&mut self, msg: &str) -> Result<()> {
        self.append("user", msg)
    }

    fn append_bot(&mut self, msg: &str) -> Result<()> {
        self.append("bot", msg)
    }

    fn append(&mut self, role: &str, msg: &str) -> Result<()> {
        self.append_at(Utc::now(), role, msg)
    }

    fn append_at(&mut self, at: DateTime<Utc>, role: &str, msg: &str) -> Result<()> {
        let path = self.path_at(at);
        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        writeln!(f, "- {} [{}] {}", at.to_rfc3339(), role, msg.replace('\n', " "))?;
        Ok(())
    }
}

fn day_file(dir: &Path, tz: Tz, at: DateTime<Utc>) -> PathBuf {
    dir.join(format!("{}.md", now_in(tz, at).format("%Y-%m-%d")))
}

fn open_bot(cfg: &Config) -> Result<Chatbot<JsonFileStore, impl Rng>> {
    let store = JsonFileStore::open(state::transactions_path()?)?;
    tracing::debug!(
        path = %store.path().display(),
        records = store.records().len(),
        "opened ledger"
    );
    Ok(Chatbot::new(
        cfg.parser(),
        store,
        rand::thread_rng(),
        cfg.performed_by.clone(),
    ))
}

fn print_reply(reply: &ChatReply, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(reply)?);
    } else {
        println!("{}\n", reply.text);
    }
    Ok(())
}

fn exchange<S: TransactionStore, R: Rng>(
    bot: &mut Chatbot<S, R>,
    log: &mut ChatLog,
    tz: Tz,
    message: &str,
) -> Result<ChatReply> {
    let reply = bot.respond(message, &now_in(tz, Utc::now()));
    log.append_user(message)?;
    log.append_bot(&reply.text)?;
    Ok(reply)
}

/// Answer a single message and exit.
pub fn run_once(cfg: &Config, message: &str, json: bool) -> Result<()> {
    let tz = cfg.tz()?;
    let mut bot = open_bot(cfg)?;
    let mut log = ChatLog::open(tz)?;
    let reply = exchange(&mut bot, &mut log, tz, message)?;
    print_reply(&reply, json)
}

/// Line-by-line chat over stdin until EOF or `/quit`.
pub fn run_chat(cfg: &Config, json: bool) -> Result<()> {
    let tz = cfg.tz()?;
    let mut bot = open_bot(cfg)?;
    let mut log = ChatLog::open(tz)?;
    let interactive = io::stdin().is_terminal();

    if interactive {
        println!("Ghi sổ với {} ({}). Gõ /quit để thoát.\n", cfg.performed_by, cfg.timezone);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("read stdin")?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if matches!(message, "/quit" | "/exit") {
            break;
        }
        let reply = exchange(&mut bot, &mut log, tz, message)?;
        print_reply(&reply, json)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_transcript_rolls_over_at_local_midnight() {
        let dir = tempfile::tempdir().unwrap();
        let tz: Tz = "Asia/Ho_Chi_Minh".parse().unwrap();
        let mut log = ChatLog::in_dir(dir.path().join("chat"), tz).unwrap();

        // 23:59 and 00:01 local time (UTC+7)
        let before = Utc.with_ymd_and_hms(2024, 6, 21, 16, 59, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 21, 17, 1, 0).unwrap();
        log.append_at(before, "user", "ăn phở 30k").unwrap();
        log.append_at(after, "user", "uống cafe 20k").unwrap();

        let first = std::fs::read_to_string(dir.path().join("chat/2024-06-21.md")).unwrap();
        let second = std::fs::read_to_string(dir.path().join("chat/2024-06-22.md")).unwrap();
        assert!(first.contains("ăn phở 30k") && !first.contains("cafe"));
        assert!(second.contains("uống cafe 20k") && !second.contains("phở"));
    }

    #[test]
    fn test_day_file_uses_local_date() {
        let tz: Tz = "Asia/Ho_Chi_Minh".parse().unwrap();
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 18, 0, 0).unwrap();
        assert_eq!(day_file(Path::new("/tmp/chat"), tz, at), Path::new("/tmp/chat/2025-01-01.md"));
    }
}
