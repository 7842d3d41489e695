use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pcp::{convert_scanline, Alignment, ComponentView, ErrorKind};
use planar_color_primitives as pcp;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const COUNTS: [usize; 3] = [100, 1000, 10_000];
const ALIGN_PAD: usize = 16;

type ConvertFn = for<'a, 'b> fn(
    &'a mut ComponentView<'b>,
    &'a [f32],
    &'a [f32],
    &'a [f32],
) -> Result<(), ErrorKind>;

fn random_lane(rng: &mut StdRng, length: usize) -> Vec<f32> {
    (0..length).map(|_| rng.gen_range(0f32..255f32)).collect()
}

/// Element offset at which a slice of `buffer` sees a forced alignment shift
/// of exactly one sample, so the rounded window stays inside the slice.
fn shift_one_offset(buffer: &[f32], lane_count: usize) -> usize {
    let vector_size = lane_count * std::mem::size_of::<f32>();
    let base = buffer.as_ptr() as usize;
    (0..lane_count)
        .find(|&offset| (base + 4 * (offset + 1)) % vector_size == 0)
        .unwrap()
}

fn supported(convert: ConvertFn) -> bool {
    let r = [0f32; 8];
    let g = [0f32; 8];
    let b = [0f32; 8];
    let mut y = [0f32; 8];
    let mut cb = [0f32; 8];
    let mut cr = [0f32; 8];

    let mut view = ComponentView::ycbcr(&mut y, &mut cb, &mut cr).unwrap();
    !matches!(
        convert(&mut view, &r, &g, &b),
        Err(ErrorKind::InvalidOperation)
    )
}

fn bench_path(
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    name: &str,
    count: usize,
    lanes: usize,
    convert: ConvertFn,
    forced: bool,
) {
    if !supported(convert) {
        return;
    }

    let mut rng = StdRng::seed_from_u64(42);
    let capacity = count + ALIGN_PAD;

    let backing_r = random_lane(&mut rng, capacity);
    let backing_g = random_lane(&mut rng, capacity);
    let backing_b = random_lane(&mut rng, capacity);
    let mut backing_y = vec![0f32; capacity];
    let mut backing_cb = vec![0f32; capacity];
    let mut backing_cr = vec![0f32; capacity];

    // The forced variants need every base address one sample before a vector
    // boundary and one trailing sample of padding inside each plane.
    let (length, off_r, off_g, off_b, off_y, off_cb, off_cr) = if forced {
        (
            (count / lanes) * lanes + 1,
            shift_one_offset(&backing_r, lanes),
            shift_one_offset(&backing_g, lanes),
            shift_one_offset(&backing_b, lanes),
            shift_one_offset(&backing_y, lanes),
            shift_one_offset(&backing_cb, lanes),
            shift_one_offset(&backing_cr, lanes),
        )
    } else {
        (count, 0, 0, 0, 0, 0, 0)
    };

    let r = &backing_r[off_r..off_r + length];
    let g = &backing_g[off_g..off_g + length];
    let b = &backing_b[off_b..off_b + length];
    let y = &mut backing_y[off_y..off_y + length];
    let cb = &mut backing_cb[off_cb..off_cb + length];
    let cr = &mut backing_cr[off_cr..off_cr + length];

    group.throughput(Throughput::Elements(count as u64));
    group.bench_with_input(BenchmarkId::new(name, count), &count, |bencher, _| {
        bencher.iter(|| {
            let mut view = ComponentView::ycbcr(&mut *y, &mut *cb, &mut *cr).unwrap();
            convert(&mut view, r, g, b).unwrap();
        });
    });
}

fn dispatched(
    view: &mut ComponentView<'_>,
    r: &[f32],
    g: &[f32],
    b: &[f32],
) -> Result<(), ErrorKind> {
    convert_scanline(view, r, g, b, Alignment::Natural)
}

fn color_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_ycbcr");

    for &count in &COUNTS {
        bench_path(
            &mut group,
            "scalar",
            count,
            1,
            pcp::convert_from_rgb_scalar,
            false,
        );

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            bench_path(
                &mut group,
                "sse2",
                count,
                pcp::SSE2_LANE_COUNT,
                pcp::convert_from_rgb_sse2,
                false,
            );
            bench_path(
                &mut group,
                "sse2_aligned",
                count,
                pcp::SSE2_LANE_COUNT,
                pcp::convert_from_rgb_sse2_aligned,
                true,
            );
            bench_path(
                &mut group,
                "avx2",
                count,
                pcp::AVX2_LANE_COUNT,
                pcp::convert_from_rgb_avx2,
                false,
            );
            bench_path(
                &mut group,
                "avx2_aligned",
                count,
                pcp::AVX2_LANE_COUNT,
                pcp::convert_from_rgb_avx2_aligned,
                true,
            );
        }

        #[cfg(target_arch = "aarch64")]
        {
            bench_path(
                &mut group,
                "neon",
                count,
                pcp::NEON_LANE_COUNT,
                pcp::convert_from_rgb_neon,
                false,
            );
            bench_path(
                &mut group,
                "neon_aligned",
                count,
                pcp::NEON_LANE_COUNT,
                pcp::convert_from_rgb_neon_aligned,
                true,
            );
        }

        bench_path(&mut group, "dispatched", count, 1, dispatched, false);
    }

    group.finish();
}

criterion_group!(benches, color_convert);
criterion_main!(benches);
