//! Basic encoding example

use oreo_core::{aggregate, archive_enum, from_bytes, to_bytes};

archive_enum! {
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    enum Unit: u8 {
        #[default]
        Celsius = 0,
        Kelvin = 1,
    }
}

aggregate! {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Sample {
        sensor: String,
        unit: Unit,
        readings: Vec<f32>,
    }
}

aggregate! {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Batch {
        batch_id: u64,
        samples: Vec<Sample>,
        note: Option<String>,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Oreo Basic Encoding Example\n");

    let batch = Batch {
        batch_id: 1_700_000_000,
        samples: (1..=3)
            .map(|i| Sample {
                sensor: format!("sensor-{}", i),
                unit: if i == 3 { Unit::Kelvin } else { Unit::Celsius },
                readings: vec![20.5 * i as f32, 21.0, 19.75],
            })
            .collect(),
        note: Some("morning run".to_string()),
    };

    let encoded = to_bytes(&batch);
    println!("Encoded {} samples into {} bytes", batch.samples.len(), encoded.len());

    for (i, chunk) in encoded.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        println!("{:04x}: {}", i * 16, hex.join(" "));
    }

    let decoded: Batch = from_bytes(&encoded)?;
    assert_eq!(decoded, batch);
    println!("\nDecoded batch {} matches the original", decoded.batch_id);

    Ok(())
}
