//! Files of published setup vectors.
//!
//! A setup file is a plain concatenation of points in the big-endian
//! compressed encoding: 32 bytes per G1 point, 64 bytes per G2 point. G1 and
//! G2 vectors live in separate files.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::thread;

use ark_bn254::{G1Affine, G2Affine};
use bn254_poly_commit_primitives::{
    consts::{SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    errors::KzgError,
    helpers,
    setup::PublicSetup,
    traits::ReadPointFromBytes,
};
use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::debug;

/// Writes both vectors of `setup` to `g1_path` and `g2_path`.
pub fn export_public_setup(
    setup: &PublicSetup,
    g1_path: &str,
    g2_path: &str,
) -> Result<(), KzgError> {
    let mut g1_writer = BufWriter::new(File::create(g1_path).map_err(io_error)?);
    for point in setup.g1() {
        g1_writer
            .write_all(&helpers::g1_to_be_bytes(point)?)
            .map_err(io_error)?;
    }
    g1_writer.flush().map_err(io_error)?;

    let mut g2_writer = BufWriter::new(File::create(g2_path).map_err(io_error)?);
    for point in setup.g2() {
        g2_writer
            .write_all(&helpers::g2_to_be_bytes(point)?)
            .map_err(io_error)?;
    }
    g2_writer.flush().map_err(io_error)?;

    debug!(
        g1_len = setup.g1().len(),
        g2_len = setup.g2().len(),
        "exported public setup"
    );
    Ok(())
}

/// Loads the first `g1_len` G1 points and `g2_len` G2 points.
///
/// Every point is checked to be on the curve and in the prime-order
/// subgroup, and the result goes through [PublicSetup::new].
pub fn load_public_setup(
    g1_path: &str,
    g2_path: &str,
    g1_len: usize,
    g2_len: usize,
) -> Result<PublicSetup, KzgError> {
    let g1 = parallel_read_points::<G1Affine>(g1_path, SIZE_OF_G1_AFFINE_COMPRESSED, g1_len)?;
    for point in &g1 {
        helpers::check_g1_point(point)?;
    }
    let g2 = parallel_read_points::<G2Affine>(g2_path, SIZE_OF_G2_AFFINE_COMPRESSED, g2_len)?;
    for point in &g2 {
        helpers::check_g2_point(point)?;
    }
    PublicSetup::new(g1, g2)
}

/// Reads points in parallel, by creating one reader thread, which reads
/// bytes from the file, and fans them out to worker threads (one per cpu)
/// which parse the bytes into points. The worker threads then fan in the
/// parsed points to the calling thread, which sorts them by their original
/// position in the file to maintain order.
fn parallel_read_points<T>(
    file_path: &str,
    point_size: usize,
    points_to_load: usize,
) -> Result<Vec<T>, KzgError>
where
    T: ReadPointFromBytes + Send + 'static,
{
    // Channel contains (bytes, position) tuples. The position is used to
    // reorder the points after processing them.
    let (sender, receiver) = bounded::<(Vec<u8>, usize)>(1000);

    let path = file_path.to_owned();
    let reader_handle =
        thread::spawn(move || read_file_chunks(&path, sender, point_size, points_to_load));

    let num_workers = num_cpus::get();
    let workers: Vec<_> = (0..num_workers)
        .map(|_| {
            let receiver = receiver.clone();
            thread::spawn(move || process_chunks::<T>(receiver))
        })
        .collect();
    drop(receiver);

    // Join the workers before the reader: a worker that fails drops its
    // receiver, which unblocks a reader waiting on a full channel.
    let mut all_points = Vec::with_capacity(points_to_load);
    let mut first_error = None;
    for worker in workers {
        match worker.join() {
            Ok(Ok(points)) => all_points.extend(points),
            Ok(Err(e)) => {
                first_error.get_or_insert(e);
            },
            Err(_) => {
                first_error.get_or_insert(KzgError::GenericError(
                    "Worker thread panicked.".to_string(),
                ));
            },
        }
    }

    match reader_handle.join() {
        Ok(Ok(())) => {},
        Ok(Err(e)) => return Err(io_error(e)),
        Err(_) => {
            return Err(KzgError::GenericError(
                "Reader thread panicked.".to_string(),
            ))
        },
    }
    if let Some(e) = first_error {
        return Err(e);
    }

    // Sort by original position to maintain order
    all_points.sort_by_key(|&(_, position)| position);

    if all_points.len() != points_to_load {
        return Err(KzgError::SetupError(format!(
            "Expected {} points, but got {}.",
            points_to_load,
            all_points.len()
        )));
    }

    Ok(all_points.into_iter().map(|(point, _)| point).collect())
}

fn process_chunks<T: ReadPointFromBytes>(
    receiver: Receiver<(Vec<u8>, usize)>,
) -> Result<Vec<(T, usize)>, KzgError> {
    receiver
        .iter()
        .map(|(chunk, position)| {
            T::read_point_from_bytes_native_compressed_be(&chunk)
                .map(|point| (point, position))
                .map_err(|e| {
                    KzgError::SerializationError(format!("point at byte {}: {}", position, e))
                })
        })
        .collect()
}

/// Sends `num_points` fixed-size chunks of the file down the channel. A short
/// file is not an error here; the caller notices the missing points.
fn read_file_chunks(
    file_path: &str,
    sender: Sender<(Vec<u8>, usize)>,
    point_size: usize,
    num_points: usize,
) -> io::Result<()> {
    let file = File::open(file_path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = vec![0u8; point_size];

    for i in 0..num_points {
        match reader.read_exact(&mut buffer) {
            Ok(()) => {},
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
        if sender.send((buffer.clone(), i * point_size)).is_err() {
            // every worker has hung up after a parse error
            break;
        }
    }
    Ok(())
}

fn io_error(e: io::Error) -> KzgError {
    KzgError::SetupError(e.to_string())
}
