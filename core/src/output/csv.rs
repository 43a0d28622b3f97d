use super::error::ExportError;
use common::records::NormalizedRecord;
use csv::WriterBuilder;
use log::error;

/// Write all records as tab delimited rows. The header row comes from the record
/// field names. A bad record is logged and skipped, the remaining rows still write
pub fn export_csv(records: &[NormalizedRecord], path: &str) -> Result<(), ExportError> {
    let writer_result = WriterBuilder::new().delimiter(b'\t').from_path(path);
    let mut writer = match writer_result {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Could not create csv file {path}: {err:?}");
            return Err(ExportError::CreateFile);
        }
    };

    for record in records {
        if let Err(err) = writer.serialize(record) {
            error!("[output] Could not write csv row: {err:?}");
        }
    }

    if let Err(err) = writer.flush() {
        error!("[output] Could not flush csv file {path}: {err:?}");
        return Err(ExportError::WriteRecord);
    }
    Ok(())
}
