use divan::Bencher;
use plinth::{AnyValue, ByteString};

fn main() {
    divan::main();
}

const S: &[u8] = &[42; 1024];

#[divan::bench_group(sample_count = 10_000)]
mod from_slice {
    use super::*;

    #[divan::bench(args = [0, 1, 16, 23, 32, 42, 1024])]
    fn bench_from_slice(n: usize) -> ByteString<'static> {
        ByteString::from(&S[0..n])
    }

    #[divan::bench(args = [0, 1, 16, 23, 32, 42, 1024])]
    fn bench_borrowed(n: usize) -> ByteString<'static> {
        ByteString::borrowed(&S[0..n])
    }
}

#[divan::bench_group(sample_count = 10_000)]
mod clone {
    use super::*;

    #[divan::bench]
    fn bench_clone_inline(bencher: Bencher) {
        let s = ByteString::from(&S[0..23]);
        bencher.bench_local(|| s.clone());
    }

    #[divan::bench]
    fn bench_clone_allocated(bencher: Bencher) {
        let s = ByteString::from(S);
        bencher.bench_local(|| s.clone());
    }

    #[divan::bench]
    fn bench_clone_borrowed(bencher: Bencher) {
        let s = ByteString::borrowed(S);
        bencher.bench_local(|| s.clone());
    }
}

#[divan::bench_group(sample_count = 10_000)]
mod detach {
    use super::*;

    #[divan::bench]
    fn bench_detach_shared(bencher: Bencher) {
        let s = ByteString::from(S);
        bencher
            .with_inputs(|| s.clone())
            .bench_local_values(|mut t| {
                t.detach();
                t
            });
    }

    #[divan::bench]
    fn bench_detach_unique(bencher: Bencher) {
        bencher
            .with_inputs(|| ByteString::from(S))
            .bench_local_values(|mut t| {
                t.detach();
                t
            });
    }
}

#[divan::bench_group(sample_count = 10_000)]
mod any {
    use super::*;

    #[divan::bench]
    fn bench_new_inline() -> AnyValue {
        AnyValue::new(divan::black_box(42_u64))
    }

    #[divan::bench]
    fn bench_new_boxed() -> AnyValue {
        AnyValue::new(divan::black_box([42_u8; 100]))
    }

    #[divan::bench]
    fn bench_clone_inline(bencher: Bencher) {
        let v = AnyValue::new(42_u64);
        bencher.bench_local(|| v.clone());
    }
}
