//! Triangle / circle tables on disk (CSV or Parquet, via polars).
//!
//! Triangle tables carry the columns `x0,y0,x1,y1,x2,y2`, one triangle per
//! row. Circle tables carry `cx,cy` and/or `r`.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ndarray::{s, Array1, Array2, Array3};
use polars::prelude::*;

/// Input column names, indexed by `(vertex, coordinate)`.
pub const TRIANGLE_COLUMNS: [[&str; 2]; 3] = [["x0", "y0"], ["x1", "y1"], ["x2", "y2"]];

fn is_parquet(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "parquet")
}

pub fn read(path: &Path) -> Result<DataFrame> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
    } else {
        LazyCsvReader::new(path).with_has_header(true).finish()
    }
    .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_shape");
    Ok(df)
}

pub fn write(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    Ok(())
}

/// Gather the six coordinate columns into a `[N, 3, 2]` batch.
pub fn triangles(df: &DataFrame) -> Result<Array3<f64>> {
    let n = df.height();
    let mut out = Array3::<f64>::zeros((n, 3, 2));
    for (k, names) in TRIANGLE_COLUMNS.iter().enumerate() {
        for (j, name) in names.iter().enumerate() {
            let col = df
                .column(name)
                .with_context(|| format!("missing column '{name}'"))?
                .cast(&DataType::Float64)
                .with_context(|| format!("column '{name}' is not numeric"))?;
            for (i, v) in col.f64()?.into_iter().enumerate() {
                out[[i, k, j]] = v.with_context(|| format!("null in column '{name}' at row {i}"))?;
            }
        }
    }
    Ok(out)
}

pub fn triangles_frame(t: &Array3<f64>) -> Result<DataFrame> {
    let mut cols = Vec::with_capacity(6);
    for (k, names) in TRIANGLE_COLUMNS.iter().enumerate() {
        for (j, name) in names.iter().enumerate() {
            cols.push(Series::new((*name).into(), t.slice(s![.., k, j]).to_vec()));
        }
    }
    Ok(DataFrame::new(cols)?)
}

pub fn circles_frame(centers: Option<&Array2<f64>>, radii: Option<&Array1<f64>>) -> Result<DataFrame> {
    let mut cols = Vec::with_capacity(3);
    if let Some(c) = centers {
        cols.push(Series::new("cx".into(), c.column(0).to_vec()));
        cols.push(Series::new("cy".into(), c.column(1).to_vec()));
    }
    if let Some(r) = radii {
        cols.push(Series::new("r".into(), r.to_vec()));
    }
    if cols.is_empty() {
        bail!("nothing to write: neither centers nor radii requested");
    }
    Ok(DataFrame::new(cols)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempfile::tempdir;

    #[test]
    fn csv_round_trip_keeps_vertex_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tris.csv");
        let t = Array3::from_shape_fn((3, 3, 2), |(i, k, j)| (i * 10 + k * 2 + j) as f64 * 0.5);
        write(&path, &mut triangles_frame(&t).unwrap()).unwrap();
        let back = triangles(&read(&path).unwrap()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn missing_column_is_reported() {
        let df = DataFrame::new(vec![Series::new("x0".into(), vec![0.0f64])]).unwrap();
        let err = triangles(&df).unwrap_err();
        assert!(format!("{err:#}").contains("y0"), "{err:#}");
    }

    #[test]
    fn integer_columns_are_cast() {
        let cols = TRIANGLE_COLUMNS
            .iter()
            .flatten()
            .map(|name| Series::new((*name).into(), vec![1i64, 2]))
            .collect::<Vec<_>>();
        let t = triangles(&DataFrame::new(cols).unwrap()).unwrap();
        assert_eq!(t.dim(), (2, 3, 2));
        assert_eq!(t[[1, 2, 1]], 2.0);
    }

    #[test]
    fn circles_frame_selects_columns() {
        let centers = array![[0.5, 0.5]];
        let radii = array![0.7];
        let both = circles_frame(Some(&centers), Some(&radii)).unwrap();
        assert_eq!(both.get_column_names().len(), 3);
        let only_r = circles_frame(None, Some(&radii)).unwrap();
        assert_eq!(only_r.width(), 1);
        assert!(circles_frame(None, None).is_err());
    }
}
