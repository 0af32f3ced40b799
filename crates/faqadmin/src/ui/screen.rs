//! The interactive session loop.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::UiConfig;
use crate::error::Result;
use crate::faq::{FaqEntry, Language};
use crate::store::FaqStore;

use super::table::render_table;
use super::Action;

/// Terminal admin screen, generic over its input and output streams.
///
/// Production wires this to locked stdin/stdout; tests drive complete
/// sessions through in-memory buffers. Every action handler reloads the
/// collection from disk, so the screen never holds stale state.
#[derive(Debug)]
pub struct AdminScreen<R, W> {
    input: R,
    output: W,
    store: FaqStore,
    ui: UiConfig,
}

impl<R: BufRead, W: Write> AdminScreen<R, W> {
    /// Create a screen over the given streams and store.
    pub fn new(input: R, output: W, store: FaqStore, ui: UiConfig) -> Self {
        Self {
            input,
            output,
            store,
            ui,
        }
    }

    /// Run the menu loop until the operator quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing file cannot be read or written,
    /// or when the output stream fails. Invalid menu input is reported on
    /// the screen and never ends the session.
    pub fn run(&mut self) -> Result<()> {
        self.print_header()?;
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let choice = line.trim();
            if choice.is_empty() {
                continue;
            }
            if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
                break;
            }
            match Action::parse(choice) {
                Some(action) => self.dispatch(action)?,
                None => writeln!(self.output, "Unknown selection: {choice}")?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!("Running action: {}", action);
        match action {
            Action::View => self.handle_view(),
            Action::Add => self.handle_add(),
            Action::Edit => self.handle_edit(),
            Action::Delete => self.handle_delete(),
        }
    }

    fn print_header(&mut self) -> Result<()> {
        writeln!(self.output, "FAQ Admin Panel")?;
        writeln!(self.output, "===============")?;
        writeln!(self.output, "Manage FAQ entries for the admission chatbot.")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Actions:")?;
        writeln!(self.output, "  1) View FAQs")?;
        writeln!(self.output, "  2) Add FAQ")?;
        writeln!(self.output, "  3) Edit FAQ")?;
        writeln!(self.output, "  4) Delete FAQ")?;
        writeln!(self.output, "  q) Quit")?;
        write!(self.output, "Select an action: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn handle_view(&mut self) -> Result<()> {
        let entries = self.store.load()?;
        writeln!(self.output)?;
        writeln!(self.output, "All FAQ Entries")?;
        writeln!(self.output, "---------------")?;
        if entries.is_empty() {
            writeln!(self.output, "No FAQs found. Add new entries!")?;
        } else {
            write!(
                self.output,
                "{}",
                render_table(&entries, self.ui.max_field_width)
            )?;
        }
        Ok(())
    }

    fn handle_add(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Add New FAQ")?;
        writeln!(self.output, "-----------")?;
        let Some(question) = self.prompt("Question")? else {
            return Ok(());
        };
        let Some(answer) = self.prompt("Answer")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Category (e.g., Admission Requirements)")? else {
            return Ok(());
        };
        let Some(language) = self.select_language(self.ui.default_language)? else {
            return Ok(());
        };

        match self.store.add(question, answer, category, language) {
            Ok(entry) => writeln!(self.output, "Added FAQ with ID: {}", entry.id)?,
            Err(err) if err.is_validation() => {
                writeln!(self.output, "Please fill in all fields.")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn handle_edit(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Edit Existing FAQ")?;
        writeln!(self.output, "-----------------")?;
        let entries = self.store.load()?;
        if entries.is_empty() {
            writeln!(self.output, "No FAQs available to edit.")?;
            return Ok(());
        }
        let Some(index) = self.select_entry(&entries, "edit")? else {
            return Ok(());
        };
        let selected = &entries[index];
        let question = selected.question.clone();
        let answer = selected.answer.clone();
        let category = selected.category.clone();
        let id = selected.id.clone();
        let current_language = selected.language;

        let Some(question) = self.prompt_with_current("Question", &question)? else {
            return Ok(());
        };
        let Some(answer) = self.prompt_with_current("Answer", &answer)? else {
            return Ok(());
        };
        let Some(category) = self.prompt_with_current("Category", &category)? else {
            return Ok(());
        };
        let Some(language) = self.select_language(current_language)? else {
            return Ok(());
        };

        self.store.update(&id, question, answer, category, language)?;
        writeln!(self.output, "FAQ updated successfully.")?;
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Delete FAQ")?;
        writeln!(self.output, "----------")?;
        let entries = self.store.load()?;
        if entries.is_empty() {
            writeln!(self.output, "No FAQs available to delete.")?;
            return Ok(());
        }
        let Some(index) = self.select_entry(&entries, "delete")? else {
            return Ok(());
        };

        self.store.delete(&entries[index].id)?;
        writeln!(self.output, "FAQ deleted successfully.")?;
        Ok(())
    }

    /// Prompt for one line. `None` means the input stream ended and the
    /// current action should be abandoned.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt showing the current value; an empty reply keeps it.
    fn prompt_with_current(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        write!(self.output, "{label} [{current}]: ")?;
        self.output.flush()?;
        match self.read_line()? {
            None => Ok(None),
            Some(line) if line.is_empty() => Ok(Some(current.to_string())),
            Some(line) => Ok(Some(line)),
        }
    }

    /// Numbered language picker; an empty reply keeps `current`.
    fn select_language(&mut self, current: Language) -> Result<Option<Language>> {
        writeln!(self.output, "Language:")?;
        for (position, language) in Language::ALL.iter().enumerate() {
            writeln!(self.output, "  {}) {}", position + 1, language)?;
        }
        loop {
            write!(self.output, "Select a language [{current}]: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let choice = line.trim();
            if choice.is_empty() {
                return Ok(Some(current));
            }
            match choice.parse::<usize>() {
                Ok(number) if (1..=Language::ALL.len()).contains(&number) => {
                    return Ok(Some(Language::ALL[number - 1]));
                }
                _ => writeln!(
                    self.output,
                    "Enter a number between 1 and {}.",
                    Language::ALL.len()
                )?,
            }
        }
    }

    /// Numbered entry picker labelled `question (id)`; returns the index
    /// into `entries`.
    fn select_entry(&mut self, entries: &[FaqEntry], verb: &str) -> Result<Option<usize>> {
        writeln!(self.output, "Select FAQ to {verb}:")?;
        for (position, entry) in entries.iter().enumerate() {
            writeln!(self.output, "  {}) {}", position + 1, entry.selection_label())?;
        }
        loop {
            write!(self.output, "Entry number: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(number) if (1..=entries.len()).contains(&number) => {
                    return Ok(Some(number - 1));
                }
                _ => writeln!(
                    self.output,
                    "Enter a number between 1 and {}.",
                    entries.len()
                )?,
            }
        }
    }

    /// Read one line without its trailing newline; `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn test_path(tag: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "faqadmin_screen_{}_{}.json",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    fn cleanup(store: &FaqStore) {
        let _ = fs::remove_file(store.path());
    }

    /// Feed a scripted session through the screen and capture its output.
    fn run_session(store: &FaqStore, script: &str) -> String {
        let mut output = Vec::new();
        let mut screen = AdminScreen::new(
            script.as_bytes(),
            &mut output,
            store.clone(),
            UiConfig::default(),
        );
        screen.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let store = FaqStore::new(test_path("quit"));
        let output = run_session(&store, "q\n");

        assert!(output.contains("FAQ Admin Panel"));
        assert!(output.contains("Manage FAQ entries for the admission chatbot."));
        assert!(output.contains("Select an action:"));
        cleanup(&store);
    }

    #[test]
    fn test_end_of_input_exits() {
        let store = FaqStore::new(test_path("eof"));
        let output = run_session(&store, "");

        assert!(output.contains("FAQ Admin Panel"));
        cleanup(&store);
    }

    #[test]
    fn test_unknown_selection_reported() {
        let store = FaqStore::new(test_path("unknown"));
        let output = run_session(&store, "bogus\nq\n");

        assert!(output.contains("Unknown selection: bogus"));
        cleanup(&store);
    }

    #[test]
    fn test_view_empty_collection() {
        let store = FaqStore::new(test_path("view_empty"));
        let output = run_session(&store, "1\nq\n");

        assert!(output.contains("All FAQ Entries"));
        assert!(output.contains("No FAQs found. Add new entries!"));
        cleanup(&store);
    }

    #[test]
    fn test_view_lists_entries_without_ids() {
        let store = FaqStore::new(test_path("view_entries"));
        let entry = store
            .add("What is the deadline?", "March 31", "Admissions", Language::English)
            .unwrap();

        let output = run_session(&store, "1\nq\n");

        assert!(output.contains("What is the deadline?"));
        assert!(output.contains("March 31"));
        // Ids stay out of the table; they only appear in selection lists.
        let table_start = output.find("All FAQ Entries").unwrap();
        assert!(!output[table_start..].contains(&entry.id));
        cleanup(&store);
    }

    #[test]
    fn test_add_creates_entry() {
        let store = FaqStore::new(test_path("add"));
        let output = run_session(
            &store,
            "2\nWhat is the fee?\nRs 5000 per semester\nFees\n1\nq\n",
        );

        assert!(output.contains("Added FAQ with ID: "));
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question, "What is the fee?");
        assert_eq!(entries[0].answer, "Rs 5000 per semester");
        assert_eq!(entries[0].category, "Fees");
        assert_eq!(entries[0].language, Language::English);
        cleanup(&store);
    }

    #[test]
    fn test_add_empty_language_uses_default() {
        let store = FaqStore::new(test_path("add_default_lang"));
        run_session(&store, "2\nQuestion?\nAnswer.\nGeneral\n\nq\n");

        let entries = store.load().unwrap();
        assert_eq!(entries[0].language, Language::English);
        cleanup(&store);
    }

    #[test]
    fn test_add_selects_language_by_number() {
        let store = FaqStore::new(test_path("add_urdu"));
        run_session(&store, "2\nسوال؟\nجواب۔\nGeneral\n2\nq\n");

        let entries = store.load().unwrap();
        assert_eq!(entries[0].language, Language::Urdu);
        cleanup(&store);
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let store = FaqStore::new(test_path("add_blank"));
        let output = run_session(&store, "2\n\nAnswer.\nGeneral\n1\nq\n");

        assert!(output.contains("Please fill in all fields."));
        assert!(store.load().unwrap().is_empty());
        cleanup(&store);
    }

    #[test]
    fn test_edit_empty_collection() {
        let store = FaqStore::new(test_path("edit_empty"));
        let output = run_session(&store, "3\nq\n");

        assert!(output.contains("No FAQs available to edit."));
        cleanup(&store);
    }

    #[test]
    fn test_edit_blank_input_keeps_current_values() {
        let store = FaqStore::new(test_path("edit_keep"));
        let entry = store
            .add("When is the deadline?", "Soon", "Admissions", Language::English)
            .unwrap();

        let output = run_session(&store, "3\n1\nWhen exactly is the deadline?\n\n\n\nq\n");

        assert!(output.contains("FAQ updated successfully."));
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, entry.id);
        assert_eq!(entries[0].question, "When exactly is the deadline?");
        assert_eq!(entries[0].answer, "Soon");
        assert_eq!(entries[0].category, "Admissions");
        assert_eq!(entries[0].language, Language::English);
        cleanup(&store);
    }

    #[test]
    fn test_edit_shows_current_values_in_prompts() {
        let store = FaqStore::new(test_path("edit_prefill"));
        store
            .add("Old question?", "Old answer", "Old category", Language::Urdu)
            .unwrap();

        let output = run_session(&store, "3\n1\n\n\n\n\nq\n");

        assert!(output.contains("Question [Old question?]:"));
        assert!(output.contains("Answer [Old answer]:"));
        assert!(output.contains("Category [Old category]:"));
        assert!(output.contains("Select a language [Urdu]:"));
        cleanup(&store);
    }

    #[test]
    fn test_edit_changes_language() {
        let store = FaqStore::new(test_path("edit_lang"));
        store
            .add("Question?", "Answer.", "General", Language::English)
            .unwrap();

        run_session(&store, "3\n1\n\n\n\n3\nq\n");

        let entries = store.load().unwrap();
        assert_eq!(entries[0].language, Language::RomanUrdu);
        cleanup(&store);
    }

    #[test]
    fn test_delete_empty_collection() {
        let store = FaqStore::new(test_path("delete_empty"));
        let output = run_session(&store, "4\nq\n");

        assert!(output.contains("No FAQs available to delete."));
        cleanup(&store);
    }

    #[test]
    fn test_delete_removes_selected_entry() {
        let store = FaqStore::new(test_path("delete"));
        let first = store
            .add("First?", "One.", "General", Language::English)
            .unwrap();
        store
            .add("Second?", "Two.", "General", Language::English)
            .unwrap();

        let output = run_session(&store, "4\n2\nq\n");

        assert!(output.contains("FAQ deleted successfully."));
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, first.id);
        cleanup(&store);
    }

    #[test]
    fn test_selection_list_shows_question_and_id() {
        let store = FaqStore::new(test_path("selection_label"));
        let entry = store
            .add("Which documents are needed?", "CNIC and transcripts", "Admissions", Language::English)
            .unwrap();

        let output = run_session(&store, "4\n1\nq\n");

        assert!(output.contains("Select FAQ to delete:"));
        assert!(output.contains(&format!("1) Which documents are needed? ({})", entry.id)));
        cleanup(&store);
    }

    #[test]
    fn test_out_of_range_entry_number_reprompts() {
        let store = FaqStore::new(test_path("reprompt"));
        store
            .add("Only one?", "Yes.", "General", Language::English)
            .unwrap();

        let output = run_session(&store, "4\n9\n1\nq\n");

        assert!(output.contains("Enter a number between 1 and 1."));
        assert!(store.load().unwrap().is_empty());
        cleanup(&store);
    }

    #[test]
    fn test_action_names_accepted_in_menu() {
        let store = FaqStore::new(test_path("names"));
        let output = run_session(&store, "view\nq\n");

        assert!(output.contains("All FAQ Entries"));
        cleanup(&store);
    }

    #[test]
    fn test_full_session_lifecycle() {
        let store = FaqStore::new(test_path("lifecycle"));
        let script = "2\nWhat is the deadline?\nMarch 31\nAdmissions\n1\n\
                      3\n1\n\nApril 15\n\n\n\
                      1\n\
                      4\n1\n\
                      1\nq\n";

        let output = run_session(&store, script);

        assert!(output.contains("Added FAQ with ID: "));
        assert!(output.contains("FAQ updated successfully."));
        assert!(output.contains("April 15"));
        assert!(output.contains("FAQ deleted successfully."));
        assert!(output.contains("No FAQs found. Add new entries!"));
        assert!(store.load().unwrap().is_empty());
        cleanup(&store);
    }
}
