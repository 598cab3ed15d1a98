use vexide::{devices::usd, fs::File, io::Write};

use crate::sink::{LogFile, SinkError, Storage};

/// The brain's micro SD slot.
pub struct SdCard;

pub struct SdFile(File);

impl Storage for SdCard {
    type File = SdFile;

    fn is_present(&self) -> bool {
        usd::usd_installed()
    }

    fn create(&mut self, path: &'static str) -> Result<SdFile, SinkError> {
        File::create(path)
            .map(SdFile)
            .map_err(|_| SinkError::Create { path })
    }
}

impl LogFile for SdFile {
    fn append(&mut self, text: &str) -> Result<(), SinkError> {
        self.0.write_all(text.as_bytes()).map_err(|_| SinkError::Write)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.0.flush().map_err(|_| SinkError::Write)
    }
}
