use super::{error::ExportError, fields::record_fields};
use crate::filesystem::files::get_filename;
use chrono::Local;
use common::records::NormalizedRecord;
use log::error;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs::{create_dir_all, write};
use std::path::Path;

/// Write the records for one source artifact as XML. One element per record with one
/// child element per field. Returns the written path
pub fn export_xml(
    records: &[NormalizedRecord],
    source_path: &str,
    directory: &str,
) -> Result<String, ExportError> {
    if let Err(err) = create_dir_all(directory) {
        error!("[output] Could not create xml directory {directory}: {err:?}");
        return Err(ExportError::CreateDirectory);
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    emit(&mut writer, Event::Start(BytesStart::new("Records")))?;

    for record in records {
        emit(&mut writer, Event::Start(BytesStart::new("Record")))?;
        for (name, value) in record_fields(record) {
            emit(&mut writer, Event::Start(BytesStart::new(name.as_str())))?;
            emit(&mut writer, Event::Text(BytesText::new(&value)))?;
            emit(&mut writer, Event::End(BytesEnd::new(name.as_str())))?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("Record")))?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("Records")))?;

    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    let filename = format!("{timestamp}_{}.xml", get_filename(source_path));
    let path = Path::new(directory).join(filename).display().to_string();

    if let Err(err) = write(&path, writer.into_inner()) {
        error!("[output] Could not write xml file {path}: {err:?}");
        return Err(ExportError::CreateFile);
    }
    Ok(path)
}

/// Write a single event, converting the failure into an export error
pub(crate) fn emit<W: std::io::Write>(
    writer: &mut Writer<W>,
    event: Event<'_>,
) -> Result<(), ExportError> {
    if let Err(err) = writer.write_event(event) {
        error!("[output] Could not write xml event: {err:?}");
        return Err(ExportError::WriteRecord);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::export_xml;
    use crate::output::fields::tests::build_test_record;
    use std::fs::read_to_string;

    #[test]
    fn test_export_xml() {
        let records = [
            build_test_record("/tmp/app.automaticDestinations-ms", "C:\\one.txt"),
            build_test_record("/tmp/app.automaticDestinations-ms", "C:\\two.txt"),
        ];
        let out_dir = std::env::temp_dir().join("xml_export_out");

        let path = export_xml(
            &records,
            "/tmp/app.automaticDestinations-ms",
            &out_dir.display().to_string(),
        )
        .unwrap();
        assert!(path.ends_with("_app.automaticDestinations-ms.xml"));

        let output = read_to_string(&path).unwrap();
        assert_eq!(output.matches("<Record>").count(), 2);
        assert!(output.contains("<LocalPath>C:\\one.txt</LocalPath>"));
        assert!(output.contains("<FileSize>4096</FileSize>"));
    }
}
