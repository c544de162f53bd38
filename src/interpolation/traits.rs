pub trait Interpolator {
    /// evaluates single point
    /// total over all finite inputs; the centering clamp keeps every
    /// table access in bounds, so there is no error to return
    fn eval(&self, x: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
