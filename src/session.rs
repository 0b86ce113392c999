use crate::pipeline::BatchResult;

/// One input queued for decryption.
#[derive(Debug, Clone)]
pub struct SessionFile {
    pub id: u64,
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Explicit session value holding the selected inputs and the last batch
/// output. Callers thread this through; nothing here is process-global.
/// Dropping or clearing the session releases every decrypted buffer.
#[derive(Debug, Default)]
pub struct Session {
    files: Vec<SessionFile>,
    next_id: u64,
    pub batch: Option<BatchResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue inputs, assigning each a stable id. Returns the ids.
    pub fn add_files<I>(&mut self, files: I) -> Vec<u64>
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let mut ids = Vec::new();
        for (name, bytes) in files {
            let id = self.next_id;
            self.next_id += 1;
            self.files.push(SessionFile { id, name, bytes });
            ids.push(id);
        }
        ids
    }

    /// Remove one queued input by id. Returns whether it existed.
    pub fn remove_file(&mut self, id: u64) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    /// Drop all queued inputs and any batch output.
    pub fn clear_all(&mut self) {
        self.files.clear();
        self.batch = None;
    }

    pub fn files(&self) -> &[SessionFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
