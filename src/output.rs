// src/output.rs
use crate::strategy::PayoffPoint;
use crate::surface::SurfacePoint;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn write_surface<W: Write>(mut out: W, points: &[SurfacePoint]) -> io::Result<()> {
    writeln!(out, "strike,time_to_expiry,price")?;
    for p in points {
        writeln!(out, "{},{},{}", p.strike, p.time_to_expiry, p.price)?;
    }
    out.flush()
}

pub fn write_payoff<W: Write>(mut out: W, curve: &[PayoffPoint]) -> io::Result<()> {
    writeln!(out, "underlying_price,pnl_now,pnl_at_expiry")?;
    for p in curve {
        writeln!(out, "{},{},{}", p.underlying_price, p.pnl_now, p.pnl_at_expiry)?;
    }
    out.flush()
}

pub fn write_surface_csv<P: AsRef<Path>>(filename: P, points: &[SurfacePoint]) -> io::Result<()> {
    write_surface(BufWriter::new(File::create(filename)?), points)
}

pub fn write_payoff_csv<P: AsRef<Path>>(filename: P, curve: &[PayoffPoint]) -> io::Result<()> {
    write_payoff(BufWriter::new(File::create(filename)?), curve)
}
