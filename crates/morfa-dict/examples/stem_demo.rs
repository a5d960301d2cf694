// Full pipeline demo: encode triples -> compile automaton -> stem words.
use morfa_dict::{Dictionary, DictionaryFeatures, MorphEncoder};
use morfa_fsa::FsaBuilder;

fn main() {
    let triples = [
        ("werken", "werk", "V:inf"),
        ("werkte", "werken", "V:past"),
        ("gewerkt", "werken", "V:part"),
        ("boeken", "boek", "N:pl"),
        ("boekje", "boek", "N:dim"),
        ("huizen", "huis", "N:pl"),
    ];

    let features = DictionaryFeatures::new("UTF-8", b'+', false, false).expect("features");
    let encoder = MorphEncoder::new(&features);

    let mut builder = FsaBuilder::new();
    for (form, lemma, tag) in triples {
        let record = encoder.encode(form, lemma, tag).expect("encode");
        println!("record: {}", String::from_utf8_lossy(&record));
        builder.insert(&record);
    }

    let dict = Dictionary::new(builder.freeze(), features);
    let mut lookup = dict.lookup();

    println!();
    for word in ["werken", "werkte", "boekje", "huizen", "fiets"] {
        let pairs = lookup.stem_and_form(word).expect("lookup");
        if pairs.is_empty() {
            println!("{word:10} -> (not in dictionary)");
        } else {
            for pair in pairs.chunks(2) {
                println!("{word:10} -> {} [{}]", pair[0], pair[1]);
            }
        }
    }
}
