//! Simple box model: `X(t) = Qs·t/η(t)`.

use crate::model::ShorelineModel;

/// The simple box model.
///
/// The shoreline advances in proportion to cumulative sediment supply
/// and inversely to the water depth it must fill. `X(0) = 0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleBoxModel;

impl ShorelineModel for SimpleBoxModel {
    fn name(&self) -> &str {
        "simple_box"
    }

    fn position(&self, sediment_supply: f64, time: f64, water_depth: f64) -> f64 {
        if time <= 0.0 {
            return 0.0;
        }
        sediment_supply * time / water_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shoreline_position_series;

    #[test]
    fn origin_is_zero() {
        assert_eq!(SimpleBoxModel.position(250.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn closed_form() {
        assert_eq!(SimpleBoxModel.position(250.0, 4.0, 10.0), 100.0);
    }

    #[test]
    fn zero_supply_never_moves() {
        let x = shoreline_position_series(
            &SimpleBoxModel,
            0.0,
            &[0.0, 1.0, 50.0],
            &[1.0, 0.01, 3.0],
        )
        .unwrap();
        assert!(x.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn shallower_water_advances_faster() {
        let deep = SimpleBoxModel.position(100.0, 10.0, 20.0);
        let shallow = SimpleBoxModel.position(100.0, 10.0, 5.0);
        assert!(shallow > deep);
    }
}
