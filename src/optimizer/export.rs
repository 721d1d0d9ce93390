use super::BayesianOptimizer;

impl<F> BayesianOptimizer<F> {
    /// Write the observation history to a writer in CSV format.
    ///
    /// Columns: `index`, `x`, `y`, `initial`. Rows follow sampling order;
    /// `initial` is `true` for the observations the optimizer was built with.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bayesopt::prelude::*;
    /// use nalgebra::DMatrix;
    ///
    /// let x = DMatrix::from_column_slice(1, 1, &[0.0]);
    /// let y = DMatrix::from_column_slice(1, 1, &[1.0]);
    /// let opt = BayesianOptimizer::new(|x: f64| Ok::<_, Error>(x.cos()), &x, &y, (0.0, 3.0), 7)
    ///     .unwrap();
    ///
    /// let mut buf = Vec::new();
    /// opt.to_csv(&mut buf).unwrap();
    /// let csv = String::from_utf8(buf).unwrap();
    /// assert_eq!(csv, "index,x,y,initial\n0,0,1,true\n");
    /// ```
    pub fn to_csv(&self, mut writer: impl std::io::Write) -> std::io::Result<()> {
        writeln!(writer, "index,x,y,initial")?;
        for (i, (x, y)) in self.gp.x().iter().zip(self.gp.y()).enumerate() {
            writeln!(writer, "{i},{x},{y},{}", i < self.n_initial)?;
        }
        Ok(())
    }
}
