use hamiltonians::Family;
use spinops::Component;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Header line for one family's table: the two parameter columns, then
/// S1S{i}{x,y,z} for every kept site, then the three product columns.
pub fn header(family: Family, sites: usize) -> String {
    let (a, b) = family.param_names();
    let mut cols = vec![a.to_string(), b.to_string()];
    for i in 1..=sites {
        for c in Component::ALL {
            cols.push(format!("S1S{}{}", i, c.label()));
        }
    }
    for c in Component::ALL {
        cols.push(format!("prodSi{}", c.label()));
    }
    cols.join(", ")
}

/// Write the buffered family table: one header line, one line per
/// successful point, in grid-enumeration order.
pub fn write_table(
    path: &Path,
    family: Family,
    sites: usize,
    rows: &[Vec<f64>],
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "{}", header(family, sites))?;
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(w, "{}", line.join(", "))?;
    }
    w.flush()
}
