#![no_main]
use libfuzzer_sys::fuzz_target;
use zenhostile::*;

struct Replay<'a>(&'a [u8], usize);

impl EntropySource for Replay<'_> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SynthError> {
        for b in buf {
            *b = self.0.get(self.1).copied().unwrap_or(0);
            self.1 += 1;
        }
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    // Fuzz input drives chaos mode; any variant it picks must build or fail cleanly
    let mut base = GenerationSettings::default();
    base.flat_expansion_len = 4096;
    base.garbage_len = 256;
    let mut entropy = Replay(data, 0);
    let Ok(settings) = GenerationSettings::chaos(&base, &mut entropy) else {
        return;
    };
    let limits = Limits {
        max_output_bytes: Some(4 << 20),
        ..Default::default()
    };
    if let Ok(artifact) = SynthesisRequest::new(&settings)
        .with_limits(&limits)
        .with_entropy(&mut entropy)
        .synthesize(enough::Unstoppable)
    {
        assert!(!artifact.bytes.is_empty());
        assert_eq!(artifact.variant, settings.variant);
    }
});
