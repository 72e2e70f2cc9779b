use crate::domain::models::{
    ExclusionCriteria, FileEntry, parse_extension_list, parse_name_list,
};
use crossterm::{
    ExecutableCommand,
    style::{Attribute, SetAttribute},
};
use log::debug;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

/// Line-based operator dialogue over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `question` and reads one trimmed answer. End of input counts as
    /// an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim().to_string();
        debug!("Operator answered {:?} to {:?}", answer, question);
        Ok(answer)
    }

    fn section_title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output)?;
        self.output.execute(SetAttribute(Attribute::Bold))?;
        writeln!(self.output, "=== {} ===", title)?;
        self.output.execute(SetAttribute(Attribute::Reset))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn echo_set<'a, I>(&mut self, label: &str, items: I, none: &str) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let items: Vec<&String> = items.into_iter().collect();
        if items.is_empty() {
            writeln!(self.output, " - {}", none)?;
            return Ok(());
        }

        writeln!(self.output, " - {}:", label)?;
        for item in items {
            writeln!(self.output, "   - {}", item)?;
        }
        Ok(())
    }

    /// Asks for extra folders to prune from the walk and echoes them back.
    pub fn prompt_ignored_folders(&mut self) -> io::Result<BTreeSet<String>> {
        self.section_title("Additional folders to ignore")?;
        let answer = self.ask(
            "Folder names to ignore entirely (comma-separated, leave empty to skip):",
        )?;
        let folders = parse_name_list(&answer);

        writeln!(self.output, "\nFolders you chose to ignore:")?;
        if folders.is_empty() {
            writeln!(self.output, " - none")?;
        } else {
            for folder in &folders {
                writeln!(self.output, " - {}", folder)?;
            }
        }
        Ok(folders)
    }

    pub fn list_files(&mut self, files: &[FileEntry]) -> io::Result<()> {
        writeln!(self.output, "\nFiles found under the root directory:")?;
        for (idx, file) in files.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, file.path().display())?;
        }
        Ok(())
    }

    /// Asks for the three exclusion criteria and echoes the result back.
    pub fn prompt_exclusions(&mut self) -> io::Result<ExclusionCriteria> {
        self.section_title("File content exclusions")?;

        let names = self.ask("File names to exclude (comma-separated, leave empty to skip):")?;
        let folders =
            self.ask("Folder names to exclude (comma-separated, leave empty to skip):")?;
        let extensions = self.ask(
            "File extensions to exclude (without the dot, comma-separated, leave empty to skip):",
        )?;

        let criteria = ExclusionCriteria {
            file_names: parse_name_list(&names),
            folder_names: parse_name_list(&folders),
            extensions: parse_extension_list(&extensions),
        };
        self.confirm_exclusions(&criteria)?;
        Ok(criteria)
    }

    pub fn confirm_exclusions(&mut self, criteria: &ExclusionCriteria) -> io::Result<()> {
        writeln!(self.output, "\nExclusion criteria in effect:")?;
        self.echo_set("Excluded file names", &criteria.file_names, "none for file names")?;
        self.echo_set(
            "Excluded folder names",
            &criteria.folder_names,
            "none for folder names",
        )?;

        let dotted: Vec<String> = criteria
            .extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect();
        self.echo_set("Excluded file types", &dotted, "none for file types")?;
        Ok(())
    }
}
