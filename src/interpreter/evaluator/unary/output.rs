use std::io::Write;

use crate::interpreter::{
    evaluator::core::{EvalResult, Session},
    value::core::Value,
    width::Width,
};

impl<W: Width> Session<W> {
    /// Writes the rendered value followed by `terminator`.
    ///
    /// # Parameters
    /// - `value`: The value to print.
    /// - `terminator`: Written after the rendered value.
    /// - `out`: The output sink.
    ///
    /// # Returns
    /// `value`, unchanged. The caller drops it.
    pub fn eval_print(&self,
                      value: Value<W>,
                      terminator: &str,
                      out: &mut dyn Write)
                      -> EvalResult<Value<W>> {
        write!(out, "{}{terminator}", value.render(self.long_form))?;
        out.flush()?;
        Ok(value)
    }
}
