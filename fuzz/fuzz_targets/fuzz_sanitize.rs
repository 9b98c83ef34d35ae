#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use logsafe::opaque::{CloneableHandle, DisplayHandle};
use logsafe::{Map, Value, dump, sanitize};

const MAX_DEPTH: usize = 4;
const MAX_LEN: usize = 8;

#[derive(Arbitrary, Debug)]
struct Entry {
    choice: u8,
}

impl Entry {
    fn value(
        &self,
        u: &mut arbitrary::Unstructured,
        depth: usize,
        ancestors: &[Map],
    ) -> arbitrary::Result<Value> {
        Ok(match self.choice % 8 {
            0 => Value::Null,
            1 => Value::from(u.arbitrary::<i64>()?),
            2 => Value::from(u.arbitrary::<String>()?),
            3 => Value::array(vec![Value::from(u.arbitrary::<bool>()?)]),
            4 => Value::opaque(DisplayHandle::new(u.arbitrary::<u32>()?)),
            5 => Value::opaque(CloneableHandle::new(u.arbitrary::<u32>()?)),
            // Cycle back to an enclosing map.
            6 if !ancestors.is_empty() => {
                let idx = u.int_in_range(0..=ancestors.len() - 1)?;
                Value::Object(ancestors[idx].clone())
            }
            _ if depth < MAX_DEPTH => Value::Object(grow_map(u, depth + 1, ancestors)?),
            _ => Value::Null,
        })
    }
}

fn grow_map(
    u: &mut arbitrary::Unstructured,
    depth: usize,
    ancestors: &[Map],
) -> arbitrary::Result<Map> {
    let map = Map::new();
    let mut chain = ancestors.to_vec();
    chain.push(map.clone());
    let len = u.int_in_range(0..=MAX_LEN)?;
    for _ in 0..len {
        let key: String = u.arbitrary()?;
        let entry: Entry = u.arbitrary()?;
        let value = entry.value(u, depth, &chain)?;
        map.insert(key, value);
    }
    Ok(map)
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(map) = grow_map(&mut u, 0, &[]) {
        let clean = sanitize(Some(&map)).expect("present input yields present output");
        let out = dump(&Value::Object(clean));
        serde_json::from_str::<serde_json::Value>(&out).expect("sanitized output dumps cleanly");
    }
});
