use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(name = "UpdateResult")]
#[derive(Clone)]
struct UpdateResultPy {
    #[pyo3(get)]
    success: bool,
    #[pyo3(get)]
    updated_text: Option<String>,
    #[pyo3(get)]
    message: String,
}

impl From<crate::UpdateResult> for UpdateResultPy {
    fn from(r: crate::UpdateResult) -> Self {
        Self { success: r.success, updated_text: r.updated_text, message: r.message }
    }
}

#[pymethods]
impl UpdateResultPy {
    fn __repr__(&self) -> String {
        format!("UpdateResult(success={}, message={:?})", self.success, self.message)
    }
}

#[pyfunction]
fn add_line_numbers(content: &str) -> String { crate::add_line_numbers(content) }

#[pyfunction]
fn add_line_numbers_range(content: &str, start: usize, end: usize) -> PyResult<String> {
    crate::add_line_numbers_range(content, start, end).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn update_content_by_line_number(content: &str, line_number: &str, new_content: &str) -> UpdateResultPy {
    crate::update_content_by_line_number(content, line_number, new_content).into()
}

#[pyfunction]
fn update_content_by_block(content: &str, start_line: &str, end_line: &str, new_content: &str) -> UpdateResultPy {
    crate::update_content_by_block(content, start_line, end_line, new_content).into()
}

#[pyfunction]
fn apply_request(content: &str, request: &str) -> PyResult<UpdateResultPy> {
    let req = crate::EditRequest::from_json(request).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(req.apply(content).into())
}

#[pymodule]
fn lnedit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<UpdateResultPy>()?;
    m.add("NO_CONTENT", crate::NO_CONTENT)?;
    m.add_function(wrap_pyfunction!(add_line_numbers, m)?)?;
    m.add_function(wrap_pyfunction!(add_line_numbers_range, m)?)?;
    m.add_function(wrap_pyfunction!(update_content_by_line_number, m)?)?;
    m.add_function(wrap_pyfunction!(update_content_by_block, m)?)?;
    m.add_function(wrap_pyfunction!(apply_request, m)?)?;
    Ok(())
}
