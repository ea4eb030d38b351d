//! CSV export of list data
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a CSV file
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// CSV text with a header line and one line per record, comma separated
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv = String::new();
    csv.push_str(&T::headers().join(","));
    csv.push('\n');
    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

/// Builds the CSV and hands it to the browser as a download
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u32);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Points"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Row("John Smith", 2450), Row("Smith, \"JJ\"", 10)]);
        assert_eq!(csv, "Name,Points\nJohn Smith,2450\n\"Smith, \"\"JJ\"\"\",10\n");
    }

    #[test]
    fn test_empty_has_header_only() {
        assert_eq!(build_csv::<Row>(&[]), "Name,Points\n");
    }
}
