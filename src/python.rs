//! PyO3 extension module.
//!
//! Exposes the call logger to Python as decorators:
//!
//! ```python
//! from layerlog import log, log_callable, log_class
//!
//! @log_class
//! class Store:
//!     def put(self, key, value): ...
//!
//! @log_callable
//! def load(path): ...
//! ```
//!
//! Exceptions raised by a wrapped callable are logged and re-raised as the
//! same exception object.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple, PyType};

use crate::calls::{Outcome, Verbatim};

/// A Python callable wrapped with call logging.
#[pyclass(module = "layerlog", dict)]
pub struct LoggedCallable {
    func: PyObject,
    qualname: String,
}

#[pymethods]
impl LoggedCallable {
    #[pyo3(signature = (*args, **kwargs))]
    fn __call__(
        &self,
        py: Python<'_>,
        args: &PyTuple,
        kwargs: Option<&PyDict>,
    ) -> PyResult<PyObject> {
        let inputs = format!(
            "args={}, kwargs={}",
            args.repr()?,
            match kwargs {
                Some(kwargs) => kwargs.repr()?.to_string(),
                None => "{}".to_string(),
            }
        );

        let logger = crate::global();
        let frame = logger.enter(&self.qualname, &inputs);

        match self.func.call(py, args, kwargs) {
            Ok(value) => {
                let rendered = value
                    .as_ref(py)
                    .str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|_| "<unprintable>".to_string());
                frame.finish(Outcome::Returned(&Verbatim(&rendered)));
                Ok(value)
            }
            Err(err) => {
                // str(exc), without the type name PyErr's Display adds.
                let message = err
                    .value(py)
                    .str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|_| "<unprintable>".to_string());
                frame.finish(Outcome::Failed(&message));
                Err(err)
            }
        }
    }

    /// Bind to an instance when looked up through one, like a plain function.
    fn __get__(
        slf: PyRef<'_, Self>,
        instance: Option<&PyAny>,
        _owner: Option<&PyAny>,
    ) -> PyResult<PyObject> {
        let py = slf.py();
        let this: PyObject = slf.into_py(py);
        match instance {
            Some(instance) if !instance.is_none() => {
                let method_type = py.import("types")?.getattr("MethodType")?;
                Ok(method_type.call1((this, instance))?.into_py(py))
            }
            _ => Ok(this),
        }
    }

    fn __repr__(&self) -> String {
        format!("<logged {}>", self.qualname)
    }
}

fn wrap(py: Python<'_>, func: &PyAny) -> PyResult<Py<LoggedCallable>> {
    let module = func
        .getattr("__module__")
        .and_then(|m| m.extract::<String>())
        .unwrap_or_else(|_| "__main__".to_string());
    let name = func
        .getattr("__qualname__")
        .or_else(|_| func.getattr("__name__"))
        .and_then(|n| n.extract::<String>())
        .unwrap_or_else(|_| "<callable>".to_string());

    let wrapped = Py::new(
        py,
        LoggedCallable {
            func: func.into_py(py),
            qualname: format!("{}.{}", module, name),
        },
    )?;

    // Carry over __name__, __qualname__, __doc__ and __wrapped__.
    py.import("functools")?
        .getattr("update_wrapper")?
        .call1((wrapped.clone_ref(py), func))?;

    Ok(wrapped)
}

/// Decorator logging the inputs, outputs and call depth of a function.
#[pyfunction]
fn log_callable(py: Python<'_>, func: &PyAny) -> PyResult<Py<LoggedCallable>> {
    wrap(py, func)
}

/// Decorator logging every callable defined directly on a class.
///
/// Inherited attributes, nested classes and non-callable attributes are left
/// alone. `staticmethod` and `classmethod` bodies are wrapped in place.
#[pyfunction]
fn log_class<'py>(py: Python<'py>, cls: &'py PyType) -> PyResult<&'py PyType> {
    let builtins = py.import("builtins")?;
    let staticmethod = builtins.getattr("staticmethod")?;
    let classmethod = builtins.getattr("classmethod")?;

    let attributes: Vec<(String, &PyAny)> = cls
        .getattr("__dict__")?
        .call_method0("items")?
        .iter()?
        .map(|item| item.and_then(|pair| pair.extract::<(String, &PyAny)>()))
        .collect::<PyResult<_>>()?;

    for (attr, value) in attributes {
        if value.is_instance_of::<PyType>() {
            continue;
        }

        if value.is_instance(staticmethod)? || value.is_instance(classmethod)? {
            let inner = wrap(py, value.getattr("__func__")?)?;
            let kind = if value.is_instance(staticmethod)? {
                staticmethod
            } else {
                classmethod
            };
            cls.setattr(attr.as_str(), kind.call1((inner,))?)?;
        } else if value.is_callable() {
            cls.setattr(attr.as_str(), wrap(py, value)?)?;
        }
    }

    Ok(cls)
}

/// Current call depth on the calling thread.
#[pyfunction]
fn depth() -> usize {
    crate::depth()
}

/// Adapter exposed as `layerlog.log`: plain log calls tagged with the current
/// call depth.
#[pyclass(module = "layerlog", name = "LayeredLogAdapter")]
pub struct PyLayeredLog;

#[pymethods]
impl PyLayeredLog {
    fn debug(&self, msg: &str) {
        crate::LOG.debug(format_args!("{}", msg))
    }

    fn info(&self, msg: &str) {
        crate::LOG.info(format_args!("{}", msg))
    }

    fn warning(&self, msg: &str) {
        crate::LOG.warn(format_args!("{}", msg))
    }

    fn error(&self, msg: &str) {
        crate::LOG.error(format_args!("{}", msg))
    }

    fn critical(&self, msg: &str) {
        crate::LOG.error(format_args!("{}", msg))
    }
}

/// Add the decorators, `depth` and the `log` adapter to `m`.
pub fn register(py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<LoggedCallable>()?;
    m.add_class::<PyLayeredLog>()?;
    m.add_function(wrap_pyfunction!(log_callable, m)?)?;
    m.add_function(wrap_pyfunction!(log_class, m)?)?;
    m.add_function(wrap_pyfunction!(depth, m)?)?;
    m.add("log", Py::new(py, PyLayeredLog)?)?;
    Ok(())
}

/// Python module definition
#[pymodule]
fn layerlog(py: Python<'_>, m: &PyModule) -> PyResult<()> {
    crate::init_logger();
    register(py, m)
}
