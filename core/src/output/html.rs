use super::{error::ExportError, fields::record_fields, xml::emit};
use chrono::Local;
use common::records::NormalizedRecord;
use log::error;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::fs::{create_dir_all, write};
use std::path::Path;

/// Write every record of the run into a single XHTML document holding one table.
/// Returns the written path
pub fn export_html(records: &[NormalizedRecord], directory: &str) -> Result<String, ExportError> {
    if let Err(err) = create_dir_all(directory) {
        error!("[output] Could not create html directory {directory}: {err:?}");
        return Err(ExportError::CreateDirectory);
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut html = BytesStart::new("html");
    html.push_attribute(("xmlns", "http://www.w3.org/1999/xhtml"));
    emit(&mut writer, Event::Start(html))?;

    emit(&mut writer, Event::Start(BytesStart::new("head")))?;
    emit(&mut writer, Event::Start(BytesStart::new("title")))?;
    emit(&mut writer, Event::Text(BytesText::new("Jump List Records")))?;
    emit(&mut writer, Event::End(BytesEnd::new("title")))?;
    emit(&mut writer, Event::End(BytesEnd::new("head")))?;

    emit(&mut writer, Event::Start(BytesStart::new("body")))?;
    let mut table = BytesStart::new("table");
    table.push_attribute(("border", "1"));
    emit(&mut writer, Event::Start(table))?;

    if let Some(first) = records.first() {
        emit(&mut writer, Event::Start(BytesStart::new("tr")))?;
        for (name, _value) in record_fields(first) {
            emit(&mut writer, Event::Start(BytesStart::new("th")))?;
            emit(&mut writer, Event::Text(BytesText::new(&name)))?;
            emit(&mut writer, Event::End(BytesEnd::new("th")))?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("tr")))?;
    }

    for record in records {
        emit(&mut writer, Event::Start(BytesStart::new("tr")))?;
        for (_name, value) in record_fields(record) {
            emit(&mut writer, Event::Start(BytesStart::new("td")))?;
            emit(&mut writer, Event::Text(BytesText::new(&value)))?;
            emit(&mut writer, Event::End(BytesEnd::new("td")))?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("tr")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("table")))?;
    emit(&mut writer, Event::End(BytesEnd::new("body")))?;
    emit(&mut writer, Event::End(BytesEnd::new("html")))?;

    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    let filename = format!("{timestamp}_jumplists.xhtml");
    let path = Path::new(directory).join(filename).display().to_string();

    if let Err(err) = write(&path, writer.into_inner()) {
        error!("[output] Could not write html file {path}: {err:?}");
        return Err(ExportError::CreateFile);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::export_html;
    use crate::output::fields::tests::build_test_record;
    use std::fs::read_to_string;

    #[test]
    fn test_export_html() {
        let records = [build_test_record(
            "/tmp/app.customDestinations-ms",
            "C:\\report.txt",
        )];
        let out_dir = std::env::temp_dir().join("html_export_out");

        let path = export_html(&records, &out_dir.display().to_string()).unwrap();
        assert!(path.ends_with("_jumplists.xhtml"));

        let output = read_to_string(&path).unwrap();
        assert!(output.contains("<th>SourceFile</th>"));
        assert!(output.contains("<td>C:\\report.txt</td>"));
        assert_eq!(output.matches("<tr>").count(), 2);
    }
}
