//! Fixture writers for HWSD tests.
//!
//! None of these files are real rasters. Record building only looks at
//! names and sizes, and conversion is exercised through a stand-in
//! converter script.

use std::fs;
use std::path::{Path, PathBuf};

/// Variables covering each storage type and the coded layers.
pub const SAMPLE_VARIABLES: &[&str] = &["AWC_CLASS", "ISSOIL", "MU_GLOBAL", "T_SAND", "S_OC"];

/// Write `<dir>/<name>.tif` filled with `size` zero bytes.
pub fn write_fake_raster(dir: &Path, name: &str, size: usize) -> PathBuf {
    let path = dir.join(format!("{}.tif", name));
    fs::write(&path, vec![0u8; size]).expect("Failed to write fake raster");
    path
}

/// Write one fake raster per name. Sizes grow with position so each file
/// can be told apart.
pub fn write_fake_rasters(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| write_fake_raster(dir, name, 1024 * (i + 1)))
        .collect()
}

/// Write an empty `<dir>/<name>.nc4` source file.
pub fn write_fake_netcdf(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(format!("{}.nc4", name));
    fs::write(&path, b"CDF").expect("Failed to write fake NetCDF");
    path
}

/// Write an executable stand-in for `gdal_translate`.
///
/// The script appends its arguments to `<dir>/converter.log`, prints a
/// line on stdout, and either creates the output file (the last argument)
/// and exits 0, or prints to stderr and exits with `exit_code`.
#[cfg(unix)]
pub fn write_fake_converter(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("converter.log");
    let script = format!(
        "#!/bin/sh\n\
         echo \"$@\" >> '{log}'\n\
         echo 'Input file size is 7200, 3600'\n\
         if [ {code} -ne 0 ]; then\n  echo 'ERROR 4: cannot open input' >&2\n  exit {code}\nfi\n\
         for last; do :; done\n\
         printf 'COG' > \"$last\"\n",
        log = log.display(),
        code = exit_code,
    );

    let path = dir.join("fake_gdal_translate.sh");
    fs::write(&path, script).expect("Failed to write fake converter");
    let mut permissions = fs::metadata(&path)
        .expect("Failed to stat fake converter")
        .permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).expect("Failed to mark fake converter executable");
    path
}

/// Lines recorded by [`write_fake_converter`], one per invocation.
pub fn converter_invocations(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("converter.log"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
