use std::fs;
use std::path::Path;

use kanban_api::board::Board;
use kanban_api::config::Config;
use speculate2::speculate;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Failed to write board file");
}

speculate! {
    before {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let board_dir = dir.path().join("kanban");
        fs::create_dir(&board_dir).expect("Failed to create board dir");
        let pointer = dir.path().join(".last_ticket");
        let board = Board::new(Config::new(&board_dir, &pointer).expect("Invalid config"));
    }

    describe "locate_ticket" {
        it "returns None when nothing matches" {
            write(&board_dir, "T-1.md", "");
            let found = board.locate_ticket("99999").expect("Lookup failed");
            assert!(found.is_none());
        }

        it "prefers the exact id over the T- prefixed file" {
            write(&board_dir, "12345.md", "");
            write(&board_dir, "T-12345.md", "");
            let found = board.locate_ticket("12345").expect("Lookup failed");
            assert_eq!(found, Some(board_dir.join("12345.md")));
        }

        it "falls back to the T- prefixed file" {
            write(&board_dir, "T-12345.md", "");
            let found = board.locate_ticket("12345").expect("Lookup failed");
            assert_eq!(found, Some(board_dir.join("T-12345.md")));
        }

        it "falls back to a substring match on the file stem" {
            write(&board_dir, "PROJ-12345-login-page.md", "");
            let found = board.locate_ticket("12345").expect("Lookup failed");
            assert_eq!(found, Some(board_dir.join("PROJ-12345-login-page.md")));
        }

        it "ignores non-markdown files in the fallback scan" {
            write(&board_dir, "12345-notes.txt", "");
            let found = board.locate_ticket("12345").expect("Lookup failed");
            assert!(found.is_none());
        }

        it "does not descend into subdirectories" {
            fs::create_dir(board_dir.join("old")).expect("mkdir failed");
            write(&board_dir.join("old"), "12345.md", "");
            let found = board.locate_ticket("12345").expect("Lookup failed");
            assert!(found.is_none());
        }

        it "rejects ids that would leave the board directory" {
            write(dir.path(), "secret.md", "## Todo\n- [ ] outside board\n");
            assert!(board.locate_ticket("../secret").expect("Lookup failed").is_none());
            assert!(board.locate_ticket("..\\secret").expect("Lookup failed").is_none());
            assert!(board.get_ticket("../secret").expect("Read failed").is_none());
        }

        it "treats a missing board directory as empty" {
            fs::remove_dir(&board_dir).expect("rmdir failed");
            let found = board.locate_ticket("12345").expect("Lookup failed");
            assert!(found.is_none());
        }
    }

    describe "get_ticket" {
        it "parses tasks with section-derived status" {
            write(&board_dir, "T-7.md", "# T-7\n\n## Todo\n- [ ] Plan\n## Work in progress\n- [ ] Build\n- [x] Review\n## Done\n- [ ] Ship\n");
            let ticket = board.get_ticket("7").expect("Read failed").expect("Ticket missing");

            assert_eq!(ticket.ticket_id, "7");
            assert_eq!(ticket.file, board_dir.join("T-7.md"));
            let status: Vec<_> = ticket.tasks.iter().map(|t| (t.name.as_str(), t.done, t.in_progress)).collect();
            assert_eq!(status, vec![
                ("Plan", false, false),
                ("Build", false, true),
                ("Review", true, true),
                ("Ship", true, false),
            ]);
        }

        it "attaches metadata by space-stripped task name" {
            write(&board_dir, "T-7.md", "## Doing\n- [ ] Implement feature\n- [ ] Other\n");
            write(&board_dir, "tasksImplementfeature.md", "estimate: 3h\n");
            let ticket = board.get_ticket("T-7").expect("Read failed").expect("Ticket missing");

            assert_eq!(ticket.tasks[0].metadata.as_deref(), Some("estimate: 3h\n"));
            assert!(ticket.tasks[1].metadata.is_none());
        }

        it "parses a file that ends inside a multi-byte character" {
            fs::write(board_dir.join("T-1.md"), b"## Todo\n- [ ] first\n- [ ] caf\xc3").expect("write failed");
            let ticket = board.get_ticket("1").expect("Read failed").expect("Ticket missing");

            assert_eq!(ticket.tasks.len(), 2);
            assert_eq!(ticket.tasks[0].name, "first");
            assert_eq!(ticket.tasks[1].name, "caf\u{FFFD}");
        }

        it "fails when a task's metadata file is not valid UTF-8" {
            write(&board_dir, "T-1.md", "## Todo\n- [ ] Broken\n");
            fs::write(board_dir.join("tasksBroken.md"), b"\xff\xfe").expect("write failed");
            assert!(board.get_ticket("1").is_err());
        }

        it "returns None for an unknown ticket" {
            let ticket = board.get_ticket("nope").expect("Read failed");
            assert!(ticket.is_none());
        }
    }

    describe "get_task_metadata" {
        it "returns the file contents verbatim" {
            write(&board_dir, "tasksWritedocs.md", "  raw\ncontent  ");
            let metadata = board.get_task_metadata("Write docs").expect("Read failed");
            assert_eq!(metadata.as_deref(), Some("  raw\ncontent  "));
        }

        it "treats an empty file as present metadata" {
            write(&board_dir, "tasksEmpty.md", "");
            let metadata = board.get_task_metadata("Empty").expect("Read failed");
            assert_eq!(metadata.as_deref(), Some(""));
        }

        it "does not substitute underscores for spaces" {
            write(&board_dir, "tasksWrite_docs.md", "wrong");
            let metadata = board.get_task_metadata("Write docs").expect("Read failed");
            assert!(metadata.is_none());
        }
    }

    describe "list_tickets" {
        it "returns an empty list for an empty board" {
            let tickets = board.list_tickets().expect("List failed");
            assert!(tickets.is_empty());
        }

        it "excludes metadata files and sorts by id" {
            write(&board_dir, "T-2.md", "");
            write(&board_dir, "T-1.md", "");
            write(&board_dir, "tasksSomething.md", "");
            write(&board_dir, "tasks.md", "");
            write(&board_dir, "Tasks-upper.md", "");
            write(&board_dir, "readme.txt", "");

            let tickets = board.list_tickets().expect("List failed");
            let ids: Vec<_> = tickets.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids, vec!["T-1", "T-2", "Tasks-upper"]);
            assert_eq!(tickets[0].file, board_dir.join("T-1.md"));
            assert!(tickets[0].file.is_absolute());
        }
    }

    describe "read_active_ticket" {
        it "returns None when the pointer file is missing" {
            let active = board.read_active_ticket().expect("Read failed");
            assert!(active.is_none());
        }

        it "returns the trimmed ticket id" {
            fs::write(&pointer, "T-12345\n").expect("write failed");
            let active = board.read_active_ticket().expect("Read failed");
            assert_eq!(active.as_deref(), Some("T-12345"));
        }

        it "fails when the pointer path cannot be read as a file" {
            fs::create_dir(&pointer).expect("mkdir failed");
            assert!(board.read_active_ticket().is_err());
        }

        it "returns None for a blank pointer file" {
            fs::write(&pointer, "  \n").expect("write failed");
            let active = board.read_active_ticket().expect("Read failed");
            assert!(active.is_none());
        }

        it "resolves the active ticket through the locator" {
            fs::write(&pointer, "12345").expect("write failed");
            write(&board_dir, "T-12345.md", "## Todo\n- [ ] Start\n");
            let ticket = board.get_active_ticket().expect("Read failed").expect("Ticket missing");
            assert_eq!(ticket.ticket_id, "12345");
            assert_eq!(ticket.tasks.len(), 1);
        }
    }
}
